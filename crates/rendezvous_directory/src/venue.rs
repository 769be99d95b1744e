use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A candidate meeting place.
///
/// Only the coordinate matters to the optimizer; the address fields are
/// carried through to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Venue {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    /// Sum of squared round-trip minutes (or the selected scoring strategy);
    /// only present on optimization results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Venue {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            address1: None,
            city: None,
            county: None,
            postcode: None,
            score: None,
        }
    }

    /// The `"lat,lng"` form travel time providers accept as a location.
    pub fn coord_string(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    /// Returns a scored copy, leaving `self` untouched.
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            score: Some(score),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubRegion {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Venue>,
}
