use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum SchemaSubcommands {
    /// JSON schema of the optimize request
    Request {
        /// Output file, stdout when omitted
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

pub fn run(subcommand: SchemaSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        SchemaSubcommands::Request { out } => {
            let schema = rendezvous_optimizer::json::schema::generate_json_schema()?;

            match out {
                Some(out) => {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(out, schema)?;
                }
                None => println!("{}", schema),
            }
        }
    }

    Ok(())
}
