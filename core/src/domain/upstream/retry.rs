use std::{fmt, future::Future, time::Duration};

use rand::Rng;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub multiplier: u32,
    /// Adds up to a quarter of the computed delay on top of it.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            multiplier: 2,
            jitter: false,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt (1-based) before the next one.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let delay = self
            .base_delay
            .saturating_mul(self.multiplier.saturating_pow(exponent));

        if self.jitter {
            let max_extra = delay.as_millis() as u64 / 4;
            delay + Duration::from_millis(rand::thread_rng().gen_range(0..=max_extra))
        } else {
            delay
        }
    }
}

/// Every attempt failed; failures are kept in attempt order.
#[derive(Debug)]
pub struct RetryExhausted<E> {
    failures: Vec<E>,
}

impl<E> RetryExhausted<E> {
    pub fn attempts(&self) -> u32 {
        self.failures.len() as u32
    }

    pub fn last(&self) -> Option<&E> {
        self.failures.last()
    }

    pub fn into_failures(self) -> Vec<E> {
        self.failures
    }
}

/// Runs `operation` until it succeeds or the policy runs out of attempts,
/// sleeping between attempts. The attempt number (1-based) is passed in.
///
/// Dropping the returned future cancels both the pending attempt and any
/// backoff sleep.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, RetryExhausted<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut failures = Vec::with_capacity(max_attempts as usize);

    for attempt in 1..=max_attempts {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "Upstream attempt failed, retrying: {}",
                    error
                );
                failures.push(error);
                tokio::time::sleep(delay).await;
            }
            Err(error) => failures.push(error),
        }
    }

    Err(RetryExhausted { failures })
}
