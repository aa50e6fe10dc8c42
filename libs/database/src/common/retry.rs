use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for start-up connection attempts
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry
    pub initial_delay: Duration,

    /// Ceiling for any single delay
    pub max_delay: Duration,

    /// Growth factor applied after each failed attempt
    pub backoff_multiplier: f64,

    /// Scale each delay by a random factor in [0.5, 1.0)
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Defaults: 3 retries, 100ms initial delay, 5s ceiling, x2 growth, jitter on
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Delay that follows `current` once the multiplier and ceiling are applied
    fn next_delay(&self, current: Duration) -> Duration {
        current.mul_f64(self.backoff_multiplier).min(self.max_delay)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Retry an async operation with exponential backoff
///
/// ```ignore
/// use database::common::{RetryConfig, retry_with_backoff};
///
/// let config = RetryConfig::new().with_max_retries(5);
/// let client = retry_with_backoff(|| database::mongodb::connect(&url), config).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    warn!(attempts = attempt, error = %e, "Giving up after retries");
                    return Err(e);
                }

                let wait = if config.use_jitter {
                    apply_jitter(delay)
                } else {
                    delay
                };

                debug!(
                    attempt,
                    max_retries = config.max_retries,
                    error = %e,
                    wait_ms = wait.as_millis() as u64,
                    "Operation failed, retrying"
                );

                tokio::time::sleep(wait).await;
                delay = config.next_delay(delay);
            }
        }
    }
}

/// Scale a delay by a pseudo-random factor between 50% and 100%
fn apply_jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;

    delay.mul_f64(factor)
}

/// [`retry_with_backoff`] with the default [`RetryConfig`]
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig::new()
            .with_initial_delay(Duration::from_millis(5))
            .without_jitter()
    }

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let counter = Arc::new(AtomicU32::new(0));
        let calls = counter.clone();

        let result = retry(|| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>("connected")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_success_after_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let calls = counter.clone();

        let result = retry_with_backoff(
            || {
                let calls = calls.clone();
                async move {
                    let attempt = calls.fetch_add(1, Ordering::SeqCst);
                    if attempt < 2 {
                        Err(format!("server selection timeout #{}", attempt + 1))
                    } else {
                        Ok("connected")
                    }
                }
            },
            fast(),
        )
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_returns_last_error() {
        let counter = Arc::new(AtomicU32::new(0));
        let calls = counter.clone();

        let result = retry_with_backoff(
            || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>("connection refused")
                }
            },
            fast().with_max_retries(2),
        )
        .await;

        assert_eq!(result.unwrap_err(), "connection refused");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_next_delay_is_capped() {
        let config = RetryConfig::new().with_max_delay(Duration::from_millis(300));
        assert_eq!(
            config.next_delay(Duration::from_millis(100)),
            Duration::from_millis(200)
        );
        assert_eq!(
            config.next_delay(Duration::from_millis(200)),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_apply_jitter_bounds() {
        let delay = Duration::from_millis(1000);
        for _ in 0..10 {
            let jittered = apply_jitter(delay);
            assert!(jittered >= Duration::from_millis(500));
            assert!(jittered <= delay);
        }
    }
}
