use rendezvous_directory::directory_client::{DirectoryClientParams, WetherspoonDirectoryClient};
use rendezvous_matrix_providers::{
    cache::{FileCache, LayeredCache, MemoryCache},
    travel_matrix_client::TravelMatrixClient,
};
use rendezvous_optimizer::optimizer::OptimizeParams;

use crate::settings::Settings;

pub struct AppState {
    pub matrix_client: TravelMatrixClient<LayeredCache>,
    pub directory: WetherspoonDirectoryClient,
    pub params: OptimizeParams,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Result<Self, anyhow::Error> {
        let cache = LayeredCache::new(
            MemoryCache::new(settings.cache_expiry),
            FileCache::from_env(settings.cache_expiry)?,
        );

        Ok(AppState {
            matrix_client: TravelMatrixClient::new(settings.provider.clone(), cache)?,
            directory: WetherspoonDirectoryClient::new(DirectoryClientParams {
                expire_after: settings.cache_expiry,
                ..DirectoryClientParams::default()
            })?,
            params: OptimizeParams::default(),
        })
    }
}
