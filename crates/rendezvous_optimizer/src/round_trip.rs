use jiff::{SignedDuration, Timestamp};
use rendezvous_matrix_providers::{
    time_constraint::TimeConstraint, travel_matrix_request::TravelMatrixRequest,
    travel_mode::TravelMode, travel_time_provider::TravelTimeProvider,
};
use tracing::debug;

use crate::{cost_matrix::CostMatrix, error::OptimizeError};

/// How long the meeting lasts before attendees head off again.
pub const DEFAULT_MEETING_DURATION: SignedDuration = SignedDuration::from_hours(2);

/// Round-trip minutes between one mode group and one venue chunk.
///
/// The outbound leg must arrive by `meeting_time`; the return leg departs at
/// `meeting_time + meeting_duration`. The result has one row per venue point
/// and one column per attendee, in the order given.
pub async fn round_trip_travel_times<P>(
    provider: &P,
    start_points: &[String],
    venue_points: &[String],
    end_points: &[String],
    mode: TravelMode,
    meeting_time: Timestamp,
    meeting_duration: SignedDuration,
) -> Result<CostMatrix, OptimizeError>
where
    P: TravelTimeProvider,
{
    if start_points.len() != end_points.len() {
        return Err(OptimizeError::PointCountMismatch {
            start_points: start_points.len(),
            end_points: end_points.len(),
        });
    }

    let departure_time = meeting_time.checked_add(meeting_duration)?;

    let to_venues = TravelMatrixRequest {
        origins: start_points.to_vec(),
        destinations: venue_points.to_vec(),
        mode,
        constraint: TimeConstraint::ArriveBy(meeting_time),
    };
    let from_venues = TravelMatrixRequest {
        origins: venue_points.to_vec(),
        destinations: end_points.to_vec(),
        mode,
        constraint: TimeConstraint::DepartAt(departure_time),
    };

    debug!(
        "Requesting {} round trips for {} venues",
        mode,
        venue_points.len()
    );

    let (outbound, inbound) = futures::try_join!(
        provider.travel_times(&to_venues),
        provider.travel_times(&from_venues)
    )?;

    if outbound.shape() != to_venues.expected_shape() {
        return Err(OptimizeError::shape(to_venues.expected_shape(), outbound.shape()));
    }
    if inbound.shape() != from_venues.expected_shape() {
        return Err(OptimizeError::shape(from_venues.expected_shape(), inbound.shape()));
    }

    CostMatrix::round_trip(&outbound, &inbound)
}
