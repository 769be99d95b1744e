use std::{future::Future, time::Duration};

use tracing::warn;

use crate::error::ProviderError;

#[derive(Debug, Clone, Copy)]
pub struct RetryParams {
    pub max_retries: u32,
    /// Delay before the first retry, doubled on every following attempt.
    pub base_delay: Duration,
    /// Upper bound on a single delay.
    pub max_delay: Duration,
}

impl Default for RetryParams {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryParams {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (starting at 1), capped at
    /// `max_delay`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        2u32.checked_pow(attempt.saturating_sub(1))
            .and_then(|factor| self.base_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
            .min(self.max_delay)
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// `max_retries` retries have been spent.
pub async fn retry_on_upstream_error<F, Fut, T>(
    params: &RetryParams,
    operation: F,
) -> Result<T, ProviderError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(err) if err.is_retryable() && attempt < params.max_retries => {
                attempt += 1;
                let delay = params.backoff(attempt);
                warn!(
                    "Travel time request failed (attempt {}/{}): {}. Retrying in {:?}",
                    attempt, params.max_retries, err, delay
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
