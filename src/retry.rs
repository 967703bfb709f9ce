use std::future::Future;
use std::time::Duration;

/// Bounded exponential backoff: `max_attempts` tries in total, sleeping
/// `initial_delay * backoff_multiplier^n` between consecutive attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub backoff_multiplier: u32,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, initial_delay: Duration, backoff_multiplier: u32) -> Self {
        Self {
            max_attempts,
            initial_delay,
            backoff_multiplier,
        }
    }
}

/// How the caller classifies a failed attempt.
#[derive(Debug)]
pub enum AttemptError<E> {
    Retryable(E),
    Fatal(E),
}

/// Runs `op` until it succeeds, fails fatally, or the attempt budget is
/// spent. The last error is returned on exhaustion. No delay is slept after
/// the final attempt.
pub async fn retry_with_backoff<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AttemptError<E>>>,
{
    let mut delay = policy.initial_delay;
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(AttemptError::Fatal(e)) => return Err(e),
            Err(AttemptError::Retryable(e)) => {
                if attempt >= policy.max_attempts {
                    return Err(e);
                }
                tokio::time::sleep(delay).await;
                delay *= policy.backoff_multiplier;
                attempt += 1;
            }
        }
    }
}
