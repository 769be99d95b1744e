use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use rendezvous_directory::{
    search::{SearchRegion, SearchType},
    venue::SubRegion,
    venue_directory::VenueDirectory,
};
use rendezvous_optimizer::json::types::DEFAULT_SEARCH_SUBREGION;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct VenuesQuery {
    #[serde(default)]
    pub search_region: SearchRegion,
    #[serde(default)]
    pub search_type: SearchType,
    #[serde(default = "default_subregion")]
    pub search_subregion: String,
}

fn default_subregion() -> String {
    DEFAULT_SEARCH_SUBREGION.to_string()
}

pub async fn get_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<VenuesQuery>, QueryRejection>,
) -> Result<Json<SubRegion>, ApiError> {
    let Query(query) = query?;

    let subregion = state
        .directory
        .subregion(
            query.search_region,
            query.search_type,
            &query.search_subregion,
        )
        .await?;

    Ok(Json(subregion))
}
