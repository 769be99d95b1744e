use clap::{Parser, Subcommand};

use crate::{
    generate::SchemaSubcommands, matrix::MatrixArgs, optimize::OptimizeArgs, venues::VenuesArgs,
};

mod client;
mod generate;
mod matrix;
mod optimize;
mod parsers;
mod table;
mod venues;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the venues of a subregion for a group of attendees
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// List the venues of a subregion
    Venues {
        #[command(flatten)]
        args: VenuesArgs,
    },
    /// Fetch one travel time matrix
    Matrix {
        #[command(flatten)]
        args: MatrixArgs,
    },
    #[command(visible_alias = "s")]
    Schema {
        #[command(subcommand)]
        commands: SchemaSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args).await?,
        Commands::Venues { args } => venues::run(args).await?,
        Commands::Matrix { args } => matrix::run(args).await?,
        Commands::Schema { commands } => generate::run(commands)?,
    }

    Ok(())
}
