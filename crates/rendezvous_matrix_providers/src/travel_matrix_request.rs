use serde::{Deserialize, Serialize};

use crate::{time_constraint::TimeConstraint, travel_mode::TravelMode};

/// A directional, mode-specific travel time query.
///
/// The answer is a `origins.len() x destinations.len()` matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelMatrixRequest {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    pub mode: TravelMode,
    pub constraint: TimeConstraint,
}

impl TravelMatrixRequest {
    pub fn expected_shape(&self) -> (usize, usize) {
        (self.origins.len(), self.destinations.len())
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty() || self.destinations.is_empty()
    }
}
