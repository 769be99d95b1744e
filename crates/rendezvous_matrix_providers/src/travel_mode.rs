use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How an attendee gets to and from the venue.
///
/// The declaration order is the grouping sort key, so requests are always
/// issued transit first, then cycling, walking and driving.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    #[serde(alias = "public_transport")]
    Transit,
    #[serde(alias = "bicycling", alias = "bike")]
    Cycling,
    #[serde(alias = "foot")]
    Walking,
    #[serde(alias = "car")]
    Driving,
}

impl TravelMode {
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Transit,
        TravelMode::Cycling,
        TravelMode::Walking,
        TravelMode::Driving,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Transit => "transit",
            TravelMode::Cycling => "cycling",
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown travel mode: {0}")]
pub struct UnknownTravelMode(pub String);

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transit" | "public_transport" => Ok(TravelMode::Transit),
            "cycling" | "bicycling" | "bike" => Ok(TravelMode::Cycling),
            "walking" | "foot" => Ok(TravelMode::Walking),
            "driving" | "car" => Ok(TravelMode::Driving),
            _ => Err(UnknownTravelMode(s.to_string())),
        }
    }
}
