use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::ProviderError, travel_matrix_request::TravelMatrixRequest, travel_mode::TravelMode,
    travel_time_matrix::TravelTimeMatrix,
};

pub const GMAPS_DISTANCE_MATRIX_API_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

pub const GMAPS_API_KEY_ENV_VAR: &str = "GMAPS_API_KEY";

/// Query value of each travel mode on the Distance Matrix API.
fn gmaps_mode(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Transit => "transit",
        TravelMode::Cycling => "bicycling",
        TravelMode::Walking => "walking",
        TravelMode::Driving => "driving",
    }
}

#[derive(Deserialize)]
struct ElementValue {
    value: f64,
}

#[derive(Deserialize)]
struct DistanceMatrixElement {
    status: String,
    duration: Option<ElementValue>,
}

#[derive(Deserialize)]
struct DistanceMatrixRow {
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Clone)]
pub struct GoogleMapsClientParams {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GoogleMapsClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GMAPS_DISTANCE_MATRIX_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        match std::env::var(GMAPS_API_KEY_ENV_VAR) {
            Ok(api_key) if !api_key.trim().is_empty() => Ok(Self::new(api_key)),
            _ => Err(ProviderError::Configuration(format!(
                "{} is not set",
                GMAPS_API_KEY_ENV_VAR
            ))),
        }
    }
}

pub struct GoogleMapsMatrixClient {
    params: GoogleMapsClientParams,
    client: reqwest::Client,
}

impl GoogleMapsMatrixClient {
    pub fn new(params: GoogleMapsClientParams) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;
        Ok(Self { params, client })
    }

    pub async fn fetch_matrix(
        &self,
        request: &TravelMatrixRequest,
    ) -> Result<TravelTimeMatrix, ProviderError> {
        if request.is_empty() {
            return TravelTimeMatrix::new(request.origins.len(), request.destinations.len(), vec![]);
        }

        let (time_param, time_value) = request.constraint.query_param();

        debug!(
            "GoogleMaps: requesting {}x{} {} matrix",
            request.origins.len(),
            request.destinations.len(),
            request.mode
        );

        let response = self
            .client
            .get(&self.params.base_url)
            .query(&[
                ("units", "imperial".to_string()),
                ("origins", request.origins.join("|")),
                ("destinations", request.destinations.join("|")),
                ("mode", gmaps_mode(request.mode).to_string()),
                ("key", self.params.api_key.clone()),
                (time_param, time_value.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let body = response.text().await?;
        let parsed: DistanceMatrixResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

        into_travel_time_matrix(request, parsed)
    }
}

fn into_travel_time_matrix(
    request: &TravelMatrixRequest,
    response: DistanceMatrixResponse,
) -> Result<TravelTimeMatrix, ProviderError> {
    if response.status != "OK" {
        return Err(ProviderError::Status {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }

    let (rows, cols) = request.expected_shape();
    if response.rows.len() != rows {
        return Err(ProviderError::Shape {
            expected_rows: rows,
            expected_cols: cols,
            rows: response.rows.len(),
            cols: response.rows.first().map(|r| r.elements.len()).unwrap_or(0),
        });
    }

    let mut minutes = Vec::with_capacity(rows * cols);
    for (origin, row) in request.origins.iter().zip(response.rows) {
        if row.elements.len() != cols {
            return Err(ProviderError::Shape {
                expected_rows: rows,
                expected_cols: cols,
                rows,
                cols: row.elements.len(),
            });
        }

        for (destination, element) in request.destinations.iter().zip(row.elements) {
            match element.duration {
                Some(duration) if element.status == "OK" => minutes.push(duration.value / 60.0),
                _ => {
                    return Err(ProviderError::Element {
                        origin: origin.clone(),
                        destination: destination.clone(),
                        status: element.status,
                    });
                }
            }
        }
    }

    TravelTimeMatrix::new(rows, cols, minutes)
}
