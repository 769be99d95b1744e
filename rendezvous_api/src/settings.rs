use anyhow::Context;
use jiff::SignedDuration;
use rendezvous_matrix_providers::{cache::ONE_DAY, travel_matrix_provider::TravelMatrixProvider};

pub const BIND_ENV_VAR: &str = "RENDEZVOUS_BIND";
pub const PROVIDER_ENV_VAR: &str = "RENDEZVOUS_PROVIDER";
pub const CACHE_EXPIRY_ENV_VAR: &str = "RENDEZVOUS_CACHE_EXPIRY";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub provider: TravelMatrixProvider,
    pub cache_expiry: SignedDuration,
}

impl Settings {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let provider = match lookup(PROVIDER_ENV_VAR) {
            Some(provider) => provider
                .parse()
                .with_context(|| format!("Invalid {}", PROVIDER_ENV_VAR))?,
            None => TravelMatrixProvider::GoogleMaps,
        };

        let cache_expiry = match lookup(CACHE_EXPIRY_ENV_VAR) {
            Some(expiry) => expiry
                .parse::<SignedDuration>()
                .with_context(|| format!("Invalid {}: {}", CACHE_EXPIRY_ENV_VAR, expiry))?,
            None => ONE_DAY,
        };

        Ok(Settings {
            bind_address: lookup(BIND_ENV_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            provider,
            cache_expiry,
        })
    }
}
