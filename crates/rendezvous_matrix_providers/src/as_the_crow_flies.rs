use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::ProviderError, travel_matrix_request::TravelMatrixRequest,
    travel_mode::TravelMode, travel_time_matrix::TravelTimeMatrix,
};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Average door-to-door speed assumed for each travel mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CrowFliesSpeeds {
    pub transit_kmh: f64,
    pub cycling_kmh: f64,
    pub walking_kmh: f64,
    pub driving_kmh: f64,
}

impl Default for CrowFliesSpeeds {
    fn default() -> Self {
        Self {
            transit_kmh: 20.0,
            cycling_kmh: 15.0,
            walking_kmh: 5.0,
            driving_kmh: 30.0,
        }
    }
}

impl CrowFliesSpeeds {
    pub fn speed_for(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Transit => self.transit_kmh,
            TravelMode::Cycling => self.cycling_kmh,
            TravelMode::Walking => self.walking_kmh,
            TravelMode::Driving => self.driving_kmh,
        }
    }

    pub(crate) fn as_array(&self) -> [f64; 4] {
        [
            self.transit_kmh,
            self.cycling_kmh,
            self.walking_kmh,
            self.driving_kmh,
        ]
    }
}

/// Parses a `"lat,lng"` location string.
pub fn parse_coordinates(location: &str) -> Result<geo_types::Point, ProviderError> {
    let invalid = || ProviderError::InvalidLocation(location.to_string());

    let (lat, lng) = location.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid());
    }

    Ok(geo_types::Point::new(lng, lat))
}

fn haversine_distance(from: geo_types::Point, to: geo_types::Point) -> f64 {
    let lat1_rad = from.y().to_radians();
    let lon1_rad = from.x().to_radians();
    let lat2_rad = to.y().to_radians();
    let lon2_rad = to.x().to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Straight-line travel times; ignores the time constraint.
pub fn as_the_crow_flies_matrix(
    request: &TravelMatrixRequest,
    speeds: &CrowFliesSpeeds,
) -> Result<TravelTimeMatrix, ProviderError> {
    let origins = request
        .origins
        .iter()
        .map(|origin| parse_coordinates(origin))
        .collect::<Result<Vec<_>, _>>()?;
    let destinations = request
        .destinations
        .iter()
        .map(|destination| parse_coordinates(destination))
        .collect::<Result<Vec<_>, _>>()?;

    let meters_per_minute = speeds.speed_for(request.mode) * 1000.0 / 60.0;

    let mut minutes = Vec::with_capacity(origins.len() * destinations.len());
    for from in &origins {
        for to in &destinations {
            minutes.push(haversine_distance(*from, *to) / meters_per_minute);
        }
    }

    TravelTimeMatrix::new(origins.len(), destinations.len(), minutes)
}
