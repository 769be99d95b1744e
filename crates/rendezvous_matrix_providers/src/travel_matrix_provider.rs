use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{as_the_crow_flies::CrowFliesSpeeds, error::ProviderError};

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TravelMatrixProvider {
    /// https://developers.google.com/maps/documentation/distance-matrix
    GoogleMaps,
    AsTheCrowFlies {
        #[serde(default)]
        speeds: CrowFliesSpeeds,
    },
}

impl std::hash::Hash for TravelMatrixProvider {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            TravelMatrixProvider::GoogleMaps => {
                state.write_u8(0);
            }
            TravelMatrixProvider::AsTheCrowFlies { speeds } => {
                state.write_u8(1);
                for speed in speeds.as_array() {
                    state.write_u64(speed.to_bits());
                }
            }
        }
    }
}

impl FromStr for TravelMatrixProvider {
    type Err = ProviderError;

    /// Accepts `gmaps` and `crow` as well as the serialized names; the crow
    /// flies provider gets its default speeds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gmaps" | "google_maps" | "google" => Ok(TravelMatrixProvider::GoogleMaps),
            "crow" | "as_the_crow_flies" => Ok(TravelMatrixProvider::AsTheCrowFlies {
                speeds: CrowFliesSpeeds::default(),
            }),
            other => Err(ProviderError::Configuration(format!(
                "Unknown travel time provider: {}",
                other
            ))),
        }
    }
}
