use clap::Args;
use rendezvous_directory::{
    directory_client::{DirectoryClientParams, WetherspoonDirectoryClient},
    search::{SearchRegion, SearchType},
    venue_directory::VenueDirectory,
};
use rendezvous_optimizer::json::types::DEFAULT_SEARCH_SUBREGION;

use crate::table::venues_table;

#[derive(Args)]
pub struct VenuesArgs {
    /// England, Wales or "N Ireland"
    #[arg(short, long, default_value = "England")]
    region: SearchRegion,

    /// all_venues, pubs_only or hotels_only
    #[arg(short = 't', long, default_value = "all_venues")]
    search_type: SearchType,

    #[arg(short, long, default_value = DEFAULT_SEARCH_SUBREGION)]
    subregion: String,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn run(args: VenuesArgs) -> anyhow::Result<()> {
    let directory = WetherspoonDirectoryClient::new(DirectoryClientParams::default())?;
    let subregion = directory
        .subregion(args.region, args.search_type, &args.subregion)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&subregion)?);
    } else {
        println!("{} ({} venues)", subregion.name, subregion.items.len());
        println!("{}", venues_table(&subregion.items));
    }

    Ok(())
}
