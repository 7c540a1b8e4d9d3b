//! Retry policy with exponential backoff.
//!
//! The policy is a pure function of the error and the attempt number, and
//! the driver performs the wait through a [`Sleeper`] so tests can run
//! without real delays.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::HttpConfig;
use crate::error::{Error, Result};

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    /// Wait for the duration, then try again.
    Retry(Duration),
    /// Give up and surface the error.
    Fail,
}

/// Bounded exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            initial_delay: Duration::from_millis(1500),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(http: &HttpConfig) -> Self {
        Self {
            max_attempts: http.max_attempts.max(1),
            initial_delay: Duration::from_millis(http.initial_backoff_ms),
            max_delay: Duration::from_millis(http.max_backoff_ms),
        }
    }

    /// Computed delay after the given (1-based) failed attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.initial_delay
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay)
    }

    /// Decide whether the failed attempt should be retried, and after how long.
    ///
    /// A server-supplied retry-after overrides the computed delay for this attempt only.
    pub fn next_action(&self, error: &Error, attempt: u32) -> RetryAction {
        if !error.is_retryable() || attempt >= self.max_attempts {
            return RetryAction::Fail;
        }
        RetryAction::Retry(error.retry_after().unwrap_or_else(|| self.backoff(attempt)))
    }
}

/// Suspends the current task between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real-time sleeper backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that records requested delays and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every delay requested so far, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(duration);
        }
    }
}

/// Run `operation` until it succeeds, fails permanently, or the attempt budget runs out.
///
/// Each retry logs an advisory with the attempt number, target, cause and delay.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    target: &str,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 1;

    loop {
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        match policy.next_action(&error, attempt) {
            RetryAction::Retry(delay) => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    url = target,
                    cause = %error,
                    delay_secs = delay.as_secs_f64(),
                    "Request failed, retrying"
                );
                sleeper.sleep(delay).await;
                attempt += 1;
            }
            RetryAction::Fail if error.is_retryable() => {
                return Err(Error::RetriesExhausted {
                    target: target.to_string(),
                    attempts: attempt,
                    source: Box::new(error),
                });
            }
            RetryAction::Fail => return Err(error),
        }
    }
}
