//! Retry configuration for unary calls.
//!
//! Provides exponential backoff retry logic applied by the service stub.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

/// Default maximum call attempts
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Default initial backoff delay in milliseconds
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 200;

/// Default maximum backoff delay in milliseconds
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 10000;

/// Retry configuration with exponential backoff.
///
/// No retry happens unless a policy is present in the merged call options;
/// the stub makes a single attempt otherwise.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of call attempts (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Initial backoff delay in milliseconds (default: 200ms)
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds (default: 10000ms = 10s)
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }
}

impl RetryConfig {
    /// Creates a tokio-retry strategy with exponential backoff.
    ///
    /// The iterator yields one delay per re-attempt, so its length is
    /// `max_attempts - 1`.
    pub fn strategy(&self) -> impl Iterator<Item = Duration> {
        ExponentialBackoff::from_millis(2)
            .factor(self.initial_backoff_ms / 2)
            .max_delay(Duration::from_millis(self.max_backoff_ms))
            .take(self.max_attempts.saturating_sub(1))
    }

    /// Whether a failed attempt with this status code may be reissued.
    pub fn is_retryable(code: tonic::Code) -> bool {
        matches!(code, tonic::Code::Unavailable)
    }
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_initial_backoff_ms() -> u64 {
    DEFAULT_INITIAL_BACKOFF_MS
}

fn default_max_backoff_ms() -> u64 {
    DEFAULT_MAX_BACKOFF_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_config() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.initial_backoff_ms, DEFAULT_INITIAL_BACKOFF_MS);
        assert_eq!(config.max_backoff_ms, DEFAULT_MAX_BACKOFF_MS);
    }

    #[test]
    fn test_retry_strategy() {
        let config = RetryConfig {
            max_attempts: 3,
            initial_backoff_ms: 100,
            max_backoff_ms: 1000,
        };

        let delays: Vec<Duration> = config.strategy().collect();
        assert_eq!(delays.len(), 2); // max_attempts - 1
    }

    #[test]
    fn test_retryable_codes() {
        assert!(RetryConfig::is_retryable(tonic::Code::Unavailable));
        assert!(!RetryConfig::is_retryable(tonic::Code::NotFound));
        assert!(!RetryConfig::is_retryable(tonic::Code::InvalidArgument));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RetryConfig = serde_json::from_str(r#"{"max_attempts": 5}"#).unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.initial_backoff_ms, DEFAULT_INITIAL_BACKOFF_MS);
    }
}
