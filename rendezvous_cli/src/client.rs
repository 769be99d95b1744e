use rendezvous_matrix_providers::{
    cache::{FileCache, LayeredCache, MemoryCache, ONE_DAY},
    travel_matrix_client::TravelMatrixClient,
    travel_matrix_provider::TravelMatrixProvider,
};

/// Matrix client backed by memory, plus the folder cache when
/// `RENDEZVOUS_CACHE_FOLDER` is set.
pub fn matrix_client(
    provider: TravelMatrixProvider,
) -> Result<TravelMatrixClient<LayeredCache>, anyhow::Error> {
    let cache = LayeredCache::new(MemoryCache::new(ONE_DAY), FileCache::from_env(ONE_DAY)?);
    Ok(TravelMatrixClient::new(provider, cache)?)
}
