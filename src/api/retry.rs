//! Bounded-retry execution for remote calls.

use std::future::Future;
use std::time::Duration;

use crate::error::api::ApiError;

/// Retry behaviour for remote calls.
///
/// Rate-limit deferrals are exempt from the attempt budget: a throttle is the
/// server pacing us, not a failing call, so it loops until the server lets
/// the call through.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total tries for a transiently failing call before giving up.
    pub max_attempts: u32,
    /// Fixed wait between transient-failure attempts.
    pub transient_backoff: Duration,
    /// Wait applied when a rate-limit response carries no suggested duration.
    pub default_rate_limit_wait: Duration,
    /// Suggested waits above this are surfaced to the operator.
    pub rate_limit_warn_threshold: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            transient_backoff: Duration::from_millis(2000),
            default_rate_limit_wait: Duration::from_millis(1000),
            rate_limit_warn_threshold: Duration::from_millis(50_000),
        }
    }
}

pub struct RetryClient {
    policy: RetryPolicy,
}

impl RetryClient {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Runs `op` until it succeeds or exhausts the attempt budget.
    ///
    /// Rate-limit responses wait the server-suggested duration (or the policy
    /// default) and retry without consuming an attempt. Any other failure
    /// waits the fixed backoff and consumes one.
    ///
    /// # Arguments
    /// - `label` - Human-readable name of the operation, used in failure logs
    /// - `op` - The call to run; invoked once per attempt
    ///
    /// # Returns
    /// - `Some(value)` - The operation eventually succeeded
    /// - `None` - The attempt budget ran out; one critical-failure line was
    ///   logged. Callers treat this as "skip this item and continue", never
    ///   as a fatal condition.
    pub async fn execute<T, F, Fut>(&self, label: &str, mut op: F) -> Option<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempts = 0;

        loop {
            match op().await {
                Ok(value) => return Some(value),
                Err(ApiError::RateLimited { retry_after_ms }) => {
                    let wait = retry_after_ms
                        .map(Duration::from_millis)
                        .unwrap_or(self.policy.default_rate_limit_wait);
                    if wait > self.policy.rate_limit_warn_threshold {
                        tracing::warn!(
                            "High rate limit in {label}, waiting {}ms",
                            wait.as_millis()
                        );
                    }
                    tokio::time::sleep(wait).await;
                }
                Err(error) => {
                    attempts += 1;
                    if attempts >= self.policy.max_attempts {
                        tracing::error!("Critical failure in {label}: {error}");
                        return None;
                    }
                    tokio::time::sleep(self.policy.transient_backoff).await;
                }
            }
        }
    }
}
