// ABOUTME: Retry logic with exponential backoff for handling transient failures
// ABOUTME: Retries network errors, timeouts, rate limits and 5xx responses

use crate::constants::retry;
use crate::error::PdcError;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: retry::MAX_RETRIES,
            initial_delay: retry::INITIAL_DELAY,
            max_delay: retry::MAX_DELAY,
            backoff_multiplier: retry::BACKOFF_MULTIPLIER,
        }
    }
}

pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, PdcError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, PdcError>>,
{
    let mut delay = config.initial_delay;
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(error) if error.is_retryable() && attempt < config.max_retries => {
                attempt += 1;
                log::debug!(
                    "Request failed (retryable): {}; retrying (attempt {}/{})",
                    error,
                    attempt,
                    config.max_retries
                );
                sleep(delay).await;
                delay = std::cmp::min(
                    Duration::from_millis(
                        (delay.as_millis() as f64 * config.backoff_multiplier) as u64,
                    ),
                    config.max_delay,
                );
            }
            Err(error) => return Err(error),
        }
    }
}
