//! Fixed-delay retry for fulfillment lookups.
//!
//! Transport failures, timeouts and non-2xx statuses are retried after a
//! constant delay. Response-shape errors are returned immediately: the same
//! body would come back on the next attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::FulfillmentError;

/// Attempt budget and delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Treated as at least 1.
    pub max_attempts: u32,
    /// Constant wait between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Returns `true` if `err` is transient and the request should be repeated.
///
/// Retriable:
/// - [`FulfillmentError::Http`]: connect failure, reset, timeout.
/// - [`FulfillmentError::UnexpectedStatus`]: any non-2xx status.
fn is_retriable(err: &FulfillmentError) -> bool {
    matches!(
        err,
        FulfillmentError::Http(_) | FulfillmentError::UnexpectedStatus { .. }
    )
}

/// Runs `operation` until it succeeds, fails with a non-retriable error, or
/// the policy's attempt budget is spent. The last error is returned.
///
/// With the default policy the operation runs at most 3 times with 2 s
/// between attempts, so a request that never succeeds sleeps 4 s in total.
pub(crate) async fn retry_fixed<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, FulfillmentError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FulfillmentError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_attempts {
                    return Err(err);
                }
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "fulfillment lookup failed, retrying"
                );
            }
        }

        tokio::time::sleep(policy.delay).await;
        attempt += 1;
    }
}
