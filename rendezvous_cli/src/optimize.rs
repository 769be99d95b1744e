use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use rendezvous_directory::directory_client::{DirectoryClientParams, WetherspoonDirectoryClient};
use rendezvous_matrix_providers::travel_matrix_provider::TravelMatrixProvider;
use rendezvous_optimizer::{json::types::JsonOptimizeRequest, optimizer::OptimizeParams};
use tracing::info;

use crate::{client::matrix_client, parsers, table::ranking_table};

#[derive(Args)]
pub struct OptimizeArgs {
    /// Optimize request JSON file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// `gmaps` or `crow`
    #[arg(short, long, default_value = "gmaps")]
    provider: TravelMatrixProvider,

    /// Overrides the meeting time of the request
    #[arg(short, long, value_parser = parsers::parse_timestamp)]
    meeting_time: Option<jiff::Timestamp>,

    #[arg(long, value_parser = parsers::parse_duration, default_value = "2h")]
    meeting_duration: jiff::SignedDuration,

    #[arg(long, default_value_t = 20)]
    batch_size: usize,

    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Only print the best `top` venues
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Write the full response as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let mut request: JsonOptimizeRequest = serde_json::from_reader(BufReader::new(f))?;
    if let Some(meeting_time) = args.meeting_time {
        request.meeting_datetime = Some(meeting_time);
    }

    let client = matrix_client(args.provider)?;
    let directory = WetherspoonDirectoryClient::new(DirectoryClientParams::default())?;
    let params = OptimizeParams {
        venue_batch_size: args.batch_size,
        meeting_duration: args.meeting_duration,
        max_concurrent_requests: args.concurrency,
        ..OptimizeParams::default()
    };

    let response = request.solve(&directory, &client, &params).await?;

    info!(
        "Best venue in {} for {}: {}",
        response.search_subregion, response.meeting_time, response.optimal_venue.name
    );

    let shown = args.top.unwrap_or(response.venue_scores.len());
    println!("{}", ranking_table(&response.venue_scores[..shown.min(response.venue_scores.len())]));

    if let Some(out) = args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(out, serde_json::to_string_pretty(&response)?)?;
    }

    Ok(())
}
