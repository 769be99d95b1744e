use rendezvous_matrix_providers::{error::ProviderError, travel_mode::UnknownTravelMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("No venue to recommend: the candidate list is empty")]
    NoVenues,

    #[error("Attendee group has {start_points} start points but {end_points} end points")]
    PointCountMismatch {
        start_points: usize,
        end_points: usize,
    },

    #[error("Expected a {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Venue batch size must be at least 1")]
    InvalidBatchSize,

    #[error("Invalid meeting time: {0}")]
    MeetingTime(#[from] jiff::Error),

    #[error(transparent)]
    UnknownTravelMode(#[from] UnknownTravelMode),

    #[error("Travel time provider failed: {0}")]
    Provider(#[from] ProviderError),
}

impl OptimizeError {
    pub(crate) fn shape(expected: (usize, usize), actual: (usize, usize)) -> Self {
        OptimizeError::ShapeMismatch {
            expected_rows: expected.0,
            expected_cols: expected.1,
            rows: actual.0,
            cols: actual.1,
        }
    }
}
