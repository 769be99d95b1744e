use tracing::{debug, instrument, warn};

use crate::{
    as_the_crow_flies::{CrowFliesSpeeds, as_the_crow_flies_matrix},
    cache::{MatricesCache, MemoryCache},
    error::ProviderError,
    gmaps_api::{GoogleMapsClientParams, GoogleMapsMatrixClient},
    retry::{RetryParams, retry_on_upstream_error},
    travel_matrix_provider::TravelMatrixProvider,
    travel_matrix_request::TravelMatrixRequest,
    travel_time_matrix::TravelTimeMatrix,
    travel_time_provider::TravelTimeProvider,
};

/// Fetches travel time matrices from the configured provider, with caching
/// and retries.
pub struct TravelMatrixClient<C = MemoryCache> {
    provider: TravelMatrixProvider,
    google_maps_client: Option<GoogleMapsMatrixClient>,
    cache: C,
    retry: RetryParams,
}

impl<C> TravelMatrixClient<C>
where
    C: MatricesCache,
{
    /// Builds a client for `provider`, reading credentials from the
    /// environment when the provider needs them.
    pub fn new(provider: TravelMatrixProvider, cache: C) -> Result<Self, ProviderError> {
        match provider {
            TravelMatrixProvider::GoogleMaps => {
                Self::google_maps(GoogleMapsClientParams::from_env()?, cache)
            }
            TravelMatrixProvider::AsTheCrowFlies { speeds } => {
                Ok(Self::as_the_crow_flies(speeds, cache))
            }
        }
    }

    pub fn google_maps(params: GoogleMapsClientParams, cache: C) -> Result<Self, ProviderError> {
        Ok(Self {
            provider: TravelMatrixProvider::GoogleMaps,
            google_maps_client: Some(GoogleMapsMatrixClient::new(params)?),
            cache,
            retry: RetryParams::default(),
        })
    }

    pub fn as_the_crow_flies(speeds: CrowFliesSpeeds, cache: C) -> Self {
        Self {
            provider: TravelMatrixProvider::AsTheCrowFlies { speeds },
            google_maps_client: None,
            cache,
            retry: RetryParams::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryParams) -> Self {
        self.retry = retry;
        self
    }

    pub fn provider(&self) -> &TravelMatrixProvider {
        &self.provider
    }

    #[instrument(skip_all, level = "debug", fields(mode = %request.mode))]
    pub async fn fetch_matrix(
        &self,
        request: &TravelMatrixRequest,
    ) -> Result<TravelTimeMatrix, ProviderError> {
        match self.cache.get_cached(&self.provider, request) {
            Ok(Some(matrix)) => {
                debug!("Travel time matrix cache hit");
                return Ok(matrix);
            }
            Ok(None) => {}
            Err(err) => warn!("Could not read travel time matrix cache: {}", err),
        }

        let matrix =
            retry_on_upstream_error(&self.retry, || self.fetch_uncached(request)).await?;

        let (rows, cols) = request.expected_shape();
        matrix.ensure_shape(rows, cols)?;

        if let Err(err) = self.cache.cache(&self.provider, request, &matrix) {
            warn!("Could not cache travel time matrix: {}", err);
        }

        Ok(matrix)
    }

    async fn fetch_uncached(
        &self,
        request: &TravelMatrixRequest,
    ) -> Result<TravelTimeMatrix, ProviderError> {
        match &self.provider {
            TravelMatrixProvider::GoogleMaps => match &self.google_maps_client {
                Some(client) => client.fetch_matrix(request).await,
                None => Err(ProviderError::Configuration(
                    "Google Maps client is not configured".to_string(),
                )),
            },
            TravelMatrixProvider::AsTheCrowFlies { speeds } => {
                as_the_crow_flies_matrix(request, speeds)
            }
        }
    }
}

impl<C> TravelTimeProvider for TravelMatrixClient<C>
where
    C: MatricesCache,
{
    async fn travel_times(
        &self,
        request: &TravelMatrixRequest,
    ) -> Result<TravelTimeMatrix, ProviderError> {
        self.fetch_matrix(request).await
    }
}
