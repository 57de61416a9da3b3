//! Bounded exponential backoff retry for the generation endpoint.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use backoff::ExponentialBackoff;
use backoff::backoff::Backoff;
use tracing::debug;

/// Default configuration: 3 total attempts, waiting 1s, 2s, 4s ... between them.
pub const MAX_ATTEMPTS: u32 = 3;
const INITIAL_INTERVAL_SECS: u64 = 1;
const BACKOFF_MULTIPLIER: f64 = 2.0;
const MAX_INTERVAL_SECS: u64 = 30;

/// How many times to try and how long to wait before the first retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            initial_interval: Duration::from_secs(INITIAL_INTERVAL_SECS),
        }
    }
}

impl RetryPolicy {
    /// Backoff schedule for this policy: doubles from `initial_interval`, no jitter.
    pub fn backoff_schedule(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            current_interval: self.initial_interval,
            initial_interval: self.initial_interval,
            randomization_factor: 0.0,
            multiplier: BACKOFF_MULTIPLIER,
            max_interval: Duration::from_secs(MAX_INTERVAL_SECS),
            max_elapsed_time: None,
            ..Default::default()
        }
    }
}

/// Retry an async operation with exponential backoff.
///
/// `attempt` is called up to `policy.max_attempts` times. Every failure that
/// will be retried is reported on stderr as a warning, then the task sleeps
/// for the next interval of the schedule.
///
/// `wrap_exhausted` receives the attempt count and the last error, and
/// converts them into the caller's `RetriesExhausted` variant.
pub async fn retry_with_backoff<T, E, Fut, F, W>(
    policy: &RetryPolicy,
    mut attempt: F,
    wrap_exhausted: W,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    W: FnOnce(u32, E) -> E,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut backoff = policy.backoff_schedule();
    let mut attempts = 0;

    loop {
        attempts += 1;
        debug!("Attempt {}/{}", attempts, max_attempts);

        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if attempts >= max_attempts => return Err(wrap_exhausted(attempts, e)),
            Err(e) => {
                let wait = backoff.next_backoff().unwrap_or(policy.initial_interval);
                eprintln!(
                    "Warning: attempt {}/{} failed: {}. Retrying in {}s...",
                    attempts,
                    max_attempts,
                    e,
                    wait.as_secs_f64()
                );
                tokio::time::sleep(wait).await;
            }
        }
    }
}
