use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SearchRegion {
    #[default]
    England,
    Wales,
    #[serde(rename = "N Ireland", alias = "Northern Ireland")]
    NorthernIreland,
}

impl SearchRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchRegion::England => "England",
            SearchRegion::Wales => "Wales",
            SearchRegion::NorthernIreland => "N Ireland",
        }
    }
}

impl Display for SearchRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "england" => Ok(SearchRegion::England),
            "wales" => Ok(SearchRegion::Wales),
            "n ireland" | "northern ireland" => Ok(SearchRegion::NorthernIreland),
            _ => Err(format!("Unknown search region: {}", s)),
        }
    }
}

/// Venue category filter of the directory search.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    #[default]
    AllVenues,
    PubsOnly,
    HotelsOnly,
}

impl SearchType {
    /// Integer code the search API expects for this category.
    pub fn query_code(&self) -> u8 {
        match self {
            SearchType::AllVenues => 0,
            SearchType::PubsOnly => 1,
            SearchType::HotelsOnly => 2,
        }
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all" | "all_venues" | "0" => Ok(SearchType::AllVenues),
            "pubs" | "pubs_only" | "1" => Ok(SearchType::PubsOnly),
            "hotels" | "hotels_only" | "2" => Ok(SearchType::HotelsOnly),
            _ => Err(format!("Unknown search type: {}", s)),
        }
    }
}
