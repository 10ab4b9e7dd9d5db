use std::future::Future;
use std::time::Duration;

use crate::error::{Error, Result};

/// Bounded retry with a fixed pause between attempts. Every HTTP error
/// is treated as retryable; the attempt cap is the only thing standing
/// between a dead endpoint and an endless loop.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            pause: Duration::from_secs(1),
        }
    }
}

/// Run `fetch` until it succeeds or the policy's attempt cap is hit.
/// The same request is repeated as-is, so a failed page is never
/// skipped and its results are never counted.
pub(crate) async fn fetch_with_retry<T, F, Fut>(mut fetch: F, policy: &RetryPolicy) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 1;
    loop {
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < policy.max_attempts => {
                log::warn!(
                    "page request failed on attempt {}/{}: {}, retrying",
                    attempt,
                    policy.max_attempts,
                    err
                );
                tokio::time::sleep(policy.pause).await;
                attempt += 1;
            }
            Err(err) => {
                log::error!("page request failed on final attempt {}: {}", attempt, err);
                return Err(Error::RetriesExhausted {
                    attempts: attempt,
                    source: Box::new(err),
                });
            }
        }
    }
}
