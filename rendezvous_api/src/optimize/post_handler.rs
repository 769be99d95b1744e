use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use rendezvous_optimizer::json::types::{JsonOptimizeRequest, JsonOptimizeResponse};

use crate::{error::ApiError, state::AppState};

pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<JsonOptimizeRequest>, JsonRejection>,
) -> Result<Json<JsonOptimizeResponse>, ApiError> {
    let Json(body) = payload?;

    let response = body
        .solve(&state.directory, &state.matrix_client, &state.params)
        .await?;

    Ok(Json(response))
}
