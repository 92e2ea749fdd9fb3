use std::time::Duration;

/// Retry rules for outbound webhook delivery.
///
/// A request is attempted `1 + max_retries` times at most. Only transport
/// errors and statuses listed in `status_forcelist` are retried.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: f64,
    pub status_forcelist: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_factor: 0.1,
            status_forcelist: vec![502, 503, 504],
        }
    }
}

impl RetryPolicy {
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.status_forcelist.contains(&status)
    }

    /// Delay before the `retry`-th retry (1-based). The first retry is
    /// immediate, later ones back off exponentially.
    pub fn backoff(&self, retry: u32) -> Duration {
        if retry <= 1 || self.backoff_factor <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = (retry - 1).min(16) as i32;
        Duration::from_secs_f64(self.backoff_factor * 2f64.powi(exponent))
    }
}
