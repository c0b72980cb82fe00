//! Bounded retry with a fixed delay between attempts.

use std::fmt::Display;
use std::thread;
use std::time::Duration;

use tracing::warn;

/// How many times to try an operation and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    /// A frontend can take about a minute to start listening after power-on
    fn default() -> Self {
        Self::new(30, Duration::from_secs(2))
    }
}

/// The error that ended a retried operation
#[derive(Debug)]
pub struct RetryFailure<E> {
    pub attempts: u32,
    pub last_error: E,
}

/// Run `op` until it succeeds, fails with an error `is_retryable` rejects, or the
/// policy runs out of attempts. `op` receives the 1-based attempt number.
pub fn retry<T, E, F, P>(
    policy: &RetryPolicy,
    mut is_retryable: P,
    mut op: F,
) -> Result<T, RetryFailure<E>>
where
    E: Display,
    F: FnMut(u32) -> Result<T, E>,
    P: FnMut(&E) -> bool,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts && is_retryable(&e) => {
                warn!(
                    "Attempt {}/{} failed: {}, retrying in {:?}",
                    attempt, max_attempts, e, policy.delay
                );
                if !policy.delay.is_zero() {
                    thread::sleep(policy.delay);
                }
                attempt += 1;
            }
            Err(e) => {
                return Err(RetryFailure {
                    attempts: attempt,
                    last_error: e,
                });
            }
        }
    }
}
