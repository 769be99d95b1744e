use rendezvous_matrix_providers::travel_mode::TravelMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Attendee {
    pub name: String,
    /// Where the attendee sets off from, any location the provider understands.
    pub start_point: String,
    /// Where the attendee heads after the meeting.
    pub end_point: String,
    #[serde(default, alias = "mode_of_transport")]
    pub travel_mode: TravelMode,
}

impl Attendee {
    pub fn new(
        name: impl Into<String>,
        start_point: impl Into<String>,
        end_point: impl Into<String>,
        travel_mode: TravelMode,
    ) -> Self {
        Self {
            name: name.into(),
            start_point: start_point.into(),
            end_point: end_point.into(),
            travel_mode,
        }
    }

    /// Same as [`Attendee::new`] with the travel mode given by name.
    pub fn with_mode_name(
        name: impl Into<String>,
        start_point: impl Into<String>,
        end_point: impl Into<String>,
        travel_mode: &str,
    ) -> Result<Self, OptimizeError> {
        Ok(Self::new(name, start_point, end_point, travel_mode.parse()?))
    }
}
