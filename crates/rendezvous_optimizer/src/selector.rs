use rendezvous_directory::venue::Venue;

use crate::{cost_matrix::CostMatrix, error::OptimizeError, scoring::ScoringStrategy};

/// Scores every venue row and returns scored copies, best first.
///
/// Equal scores keep their input order. `venues` is left untouched.
pub fn rank_venues(
    costs: &CostMatrix,
    venues: &[Venue],
    strategy: &ScoringStrategy,
) -> Result<Vec<Venue>, OptimizeError> {
    if venues.is_empty() {
        return Err(OptimizeError::NoVenues);
    }
    if costs.rows() != venues.len() {
        return Err(OptimizeError::shape(
            (venues.len(), costs.cols()),
            costs.shape(),
        ));
    }

    let mut ranked = venues
        .iter()
        .zip(costs.iter_rows())
        .map(|(venue, row)| venue.with_score(strategy.score(row)))
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| {
        a.score
            .unwrap_or_default()
            .total_cmp(&b.score.unwrap_or_default())
    });

    Ok(ranked)
}
