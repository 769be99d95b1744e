mod error;
mod optimize;
mod routes;
mod settings;
mod state;
mod venues;

use std::sync::Arc;

use axum::serve;
use tracing::{Level, info};

use crate::{routes::app, settings::Settings, state::AppState};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let settings = Settings::from_env()?;
    info!(
        "Starting with provider {:?}, cache expiry {}",
        settings.provider, settings.cache_expiry
    );

    let state = Arc::new(AppState::from_settings(&settings)?);

    let listener = tokio::net::TcpListener::bind(&settings.bind_address).await?;
    info!("Listening on {}", settings.bind_address);

    serve(listener, app(state)).await?;

    Ok(())
}
