//! Client configuration options.

use std::time::Duration;

use crate::{Error, Result};

/// Akeneo PIM major version the client talks to.
///
/// The version only affects path selection (products move to a UUID-based
/// path from version 7 on); everything else is identical across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PimVersion {
    /// Akeneo PIM 4.x
    V4,
    /// Akeneo PIM 5.x
    V5,
    /// Akeneo PIM 6.x
    #[default]
    V6,
    /// Akeneo PIM 7.x
    V7,
}

impl PimVersion {
    /// Version label as reported by the PIM.
    pub fn as_str(&self) -> &'static str {
        match self {
            PimVersion::V4 => "4.0",
            PimVersion::V5 => "5.0",
            PimVersion::V6 => "6.0",
            PimVersion::V7 => "7.0",
        }
    }

    /// Parse a major version number.
    pub fn from_major(major: u32) -> Result<Self> {
        match major {
            4 => Ok(PimVersion::V4),
            5 => Ok(PimVersion::V5),
            6 => Ok(PimVersion::V6),
            7 => Ok(PimVersion::V7),
            other => Err(Error::Config(format!("unsupported PIM version {other}"))),
        }
    }
}

/// Configuration for the Akeneo client.
///
/// # Example
///
/// ```
/// use akeneo_rs::{ClientConfig, PimVersion};
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://pim.example.com/")
///     .with_pim_version(PimVersion::V7)
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the PIM instance.
    pub base_url: String,
    /// PIM major version.
    pub pim_version: PimVersion,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Throttling retry configuration.
    pub retry: RetryConfig,
    /// Outbound request pacing.
    pub rate_limit: RateLimitConfig,
}

impl ClientConfig {
    /// Create a configuration for the given PIM base address with defaults
    /// matching the documented API limits.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            pim_version: PimVersion::default(),
            timeout: Duration::from_secs(10),
            user_agent: format!("akeneo-rs/{}", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }

    /// Set the PIM version.
    pub fn with_pim_version(mut self, version: PimVersion) -> Self {
        self.pim_version = version;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the throttling retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Set the outbound rate limit.
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }
}

/// Configuration for retrying throttled (HTTP 429) requests.
///
/// Only throttling is retried; any other failure is terminal for the call.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial call.
    pub max_retries: u32,
    /// Backoff before the first retry.
    pub initial_backoff: Duration,
    /// Upper bound on the backoff between attempts.
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_secs(3),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set the backoff before the first retry.
    pub fn with_initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the upper backoff bound.
    pub fn with_max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Backoff before retry number `attempt` (zero-based), doubling from the
    /// initial wait and clamped to the maximum.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let initial = self.initial_backoff.as_millis() as u64;
        let backoff = initial.saturating_mul(2u64.saturating_pow(attempt));
        Duration::from_millis(backoff.min(self.max_backoff.as_millis() as u64))
    }
}

/// Outbound request pacing: at most `max_ops` dispatches per `interval`.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum operations per interval.
    pub max_ops: u32,
    /// Pacing interval.
    pub interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // The documented Akeneo ceiling is 5 requests per second.
        Self {
            max_ops: 5,
            interval: Duration::from_secs(1),
        }
    }
}

impl RateLimitConfig {
    /// Create a pacing configuration.
    pub fn new(max_ops: u32, interval: Duration) -> Self {
        Self { max_ops, interval }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("https://pim.example.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.pim_version, PimVersion::V6);
        assert_eq!(config.rate_limit.max_ops, 5);
        assert_eq!(config.retry.max_retries, 2);
    }

    #[test]
    fn test_pim_version_parsing() {
        assert_eq!(PimVersion::from_major(7).unwrap(), PimVersion::V7);
        assert!(PimVersion::from_major(3).is_err());
        assert!(PimVersion::from_major(8).is_err());
        assert_eq!(PimVersion::V5.as_str(), "5.0");
    }

    #[test]
    fn test_retry_backoff_doubles_and_clamps() {
        let retry = RetryConfig::default();
        assert_eq!(retry.backoff_for_attempt(0), Duration::from_secs(3));
        assert_eq!(retry.backoff_for_attempt(1), Duration::from_secs(6));
        assert_eq!(retry.backoff_for_attempt(2), Duration::from_secs(12));
        assert_eq!(retry.backoff_for_attempt(3), Duration::from_secs(24));
        assert_eq!(retry.backoff_for_attempt(4), Duration::from_secs(30));
    }
}
