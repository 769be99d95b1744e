use jiff::{SignedDuration, Timestamp};
use rendezvous_directory::venue::Venue;
use rendezvous_matrix_providers::travel_time_provider::TravelTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    aggregate::calculate_venue_travel_times, attendee::Attendee,
    batching::DEFAULT_VENUE_BATCH_SIZE, error::OptimizeError, round_trip::DEFAULT_MEETING_DURATION,
    scoring::ScoringStrategy, selector::rank_venues,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeParams {
    /// Venues per provider request.
    pub venue_batch_size: usize,
    /// Time between arriving at the venue and setting off for the end point.
    pub meeting_duration: SignedDuration,
    pub scoring: ScoringStrategy,
    /// Round trips in flight at once.
    pub max_concurrent_requests: usize,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            venue_batch_size: DEFAULT_VENUE_BATCH_SIZE,
            meeting_duration: DEFAULT_MEETING_DURATION,
            scoring: ScoringStrategy::default(),
            max_concurrent_requests: 4,
        }
    }
}

/// Ranks `venues` by how much travel they cost the group, best first.
///
/// Fails when `venues` is empty or when any provider call fails; there is no
/// partial ranking.
#[instrument(skip_all, fields(venues = venues.len(), attendees = attendees.len()))]
pub async fn optimize<P>(
    provider: &P,
    venues: &[Venue],
    attendees: &[Attendee],
    meeting_time: Timestamp,
    params: &OptimizeParams,
) -> Result<Vec<Venue>, OptimizeError>
where
    P: TravelTimeProvider,
{
    if venues.is_empty() {
        return Err(OptimizeError::NoVenues);
    }

    let costs =
        calculate_venue_travel_times(provider, venues, attendees, meeting_time, params).await?;
    let ranked = rank_venues(&costs, venues, &params.scoring)?;

    if let Some(best) = ranked.first() {
        info!(
            venue = %best.name,
            score = ?best.score,
            "Optimal venue for meeting at {}",
            meeting_time
        );
    }

    Ok(ranked)
}
