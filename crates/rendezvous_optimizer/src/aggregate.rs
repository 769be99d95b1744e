use futures::{StreamExt, TryStreamExt, stream};
use jiff::Timestamp;
use rendezvous_directory::venue::Venue;
use rendezvous_matrix_providers::travel_time_provider::TravelTimeProvider;
use tracing::{debug, instrument};

use crate::{
    attendee::Attendee,
    batching::VenueBatcher,
    cost_matrix::CostMatrix,
    error::OptimizeError,
    grouping::group_attendees_by_travel_mode,
    optimizer::OptimizeParams,
    round_trip::round_trip_travel_times,
};

/// Round-trip minutes for every (venue, attendee) pair.
///
/// Row `i` is `venues[i]` and column `j` is `attendees[j]`, whatever the batch
/// size and however many travel modes are involved.
#[instrument(skip_all, level = "debug")]
pub async fn calculate_venue_travel_times<P>(
    provider: &P,
    venues: &[Venue],
    attendees: &[Attendee],
    meeting_time: Timestamp,
    params: &OptimizeParams,
) -> Result<CostMatrix, OptimizeError>
where
    P: TravelTimeProvider,
{
    let batcher = VenueBatcher::new(params.venue_batch_size)?;
    let groups = group_attendees_by_travel_mode(attendees);

    if groups.is_empty() || venues.is_empty() {
        return Ok(CostMatrix::zeros(venues.len(), attendees.len()));
    }

    let chunks: Vec<Vec<String>> = batcher
        .batches(venues)
        .map(|chunk| chunk.iter().map(Venue::coord_string).collect())
        .collect();

    debug!(
        "Computing travel times for {} venue chunks and {} travel modes",
        chunks.len(),
        groups.len()
    );

    // Chunk-major, group-minor; `buffered` yields in this order regardless of
    // which request finishes first.
    let mut requests = Vec::with_capacity(chunks.len() * groups.len());
    for venue_points in &chunks {
        for group in &groups {
            requests.push(round_trip_travel_times(
                provider,
                &group.start_points,
                venue_points,
                &group.end_points,
                group.mode,
                meeting_time,
                params.meeting_duration,
            ));
        }
    }

    let blocks: Vec<CostMatrix> = stream::iter(requests)
        .buffered(params.max_concurrent_requests.max(1))
        .try_collect()
        .await?;

    let chunk_blocks = blocks
        .chunks(groups.len())
        .map(CostMatrix::hstack)
        .collect::<Result<Vec<_>, _>>()?;
    let grouped = CostMatrix::vstack(&chunk_blocks)?;

    let positions: Vec<usize> = groups
        .iter()
        .flat_map(|group| group.indices.iter().copied())
        .collect();
    let matrix = grouped.scatter_columns(&positions)?;

    matrix.ensure_shape(venues.len(), attendees.len())?;

    Ok(matrix)
}
