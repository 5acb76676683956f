use std::time::Duration;

use tokio::time::{Instant, sleep};

/// Client-side guard for the catalog's per-minute request quota.
///
/// Every request that counts against the quota goes through
/// [`RateLimiter::throttle`] right before it is sent. The limiter only
/// remembers when the previous request left, so a single owner drives it
/// and no locking is involved.
///
/// Time comes from `tokio::time`, which lets tests run against a paused
/// clock instead of sleeping for real.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Spacing derived from a published quota, e.g. 60 per minute is one second.
    pub fn per_minute(requests: u32) -> Self {
        Self::new(Duration::from_secs(60) / requests.max(1))
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until `min_interval` has passed since the previous call returned.
    ///
    /// The very first call returns immediately.
    pub async fn throttle(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }

        self.last_call = Some(Instant::now());
    }
}
