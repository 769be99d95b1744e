use clap::Args;
use rendezvous_matrix_providers::{
    time_constraint::TimeConstraint, travel_matrix_provider::TravelMatrixProvider,
    travel_matrix_request::TravelMatrixRequest, travel_mode::TravelMode,
};

use crate::{client::matrix_client, parsers, table::matrix_table};

#[derive(Args)]
pub struct MatrixArgs {
    /// Repeat for several origins
    #[arg(long = "origin", required = true)]
    origins: Vec<String>,

    /// Repeat for several destinations
    #[arg(long = "destination", required = true)]
    destinations: Vec<String>,

    #[arg(short, long, default_value = "transit")]
    mode: TravelMode,

    #[arg(short, long, default_value = "gmaps")]
    provider: TravelMatrixProvider,

    #[arg(long, value_parser = parsers::parse_timestamp, conflicts_with = "depart_at")]
    arrive_by: Option<jiff::Timestamp>,

    #[arg(long, value_parser = parsers::parse_timestamp)]
    depart_at: Option<jiff::Timestamp>,
}

impl MatrixArgs {
    fn constraint(&self) -> TimeConstraint {
        match (self.arrive_by, self.depart_at) {
            (Some(arrive_by), _) => TimeConstraint::ArriveBy(arrive_by),
            (None, Some(depart_at)) => TimeConstraint::DepartAt(depart_at),
            (None, None) => TimeConstraint::DepartAt(jiff::Timestamp::now()),
        }
    }
}

pub async fn run(args: MatrixArgs) -> anyhow::Result<()> {
    let client = matrix_client(args.provider.clone())?;
    let request = TravelMatrixRequest {
        constraint: args.constraint(),
        origins: args.origins,
        destinations: args.destinations,
        mode: args.mode,
    };

    let matrix = client.fetch_matrix(&request).await?;

    println!(
        "{}",
        matrix_table(&request.origins, &request.destinations, &matrix)
    );

    Ok(())
}
