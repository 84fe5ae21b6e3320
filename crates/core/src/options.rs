use crate::retry::RetryConfig;
use std::time::Duration;

/// Per-invocation configuration merged over the client-level defaults.
///
/// Metadata pairs are forwarded as ASCII gRPC metadata; a per-call pair with
/// the same key as a default replaces it on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    pub timeout: Option<Duration>,
    pub retry: Option<RetryConfig>,
    pub metadata: Vec<(String, String)>,
}

impl CallOptions {
    pub fn new() -> CallOptions {
        CallOptions::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> CallOptions {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> CallOptions {
        self.retry = Some(retry);
        self
    }

    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> CallOptions {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// Merge these per-call options over `defaults`.
    ///
    /// Per-call values win; metadata accumulates with the per-call pairs
    /// appended last so they take precedence on insertion.
    pub fn merge_over(&self, defaults: &CallOptions) -> CallOptions {
        CallOptions {
            timeout: self.timeout.or(defaults.timeout),
            retry: self.retry.clone().or_else(|| defaults.retry.clone()),
            metadata: defaults
                .metadata
                .iter()
                .cloned()
                .chain(self.metadata.iter().cloned())
                .collect(),
        }
    }
}

/// A request message paired with its per-call options.
#[derive(Debug, Clone)]
pub struct CallRequest<M> {
    pub message: M,
    pub options: CallOptions,
}

impl<M> CallRequest<M> {
    pub fn new(message: M) -> CallRequest<M> {
        CallRequest {
            message,
            options: CallOptions::default(),
        }
    }

    pub fn with_options(message: M, options: CallOptions) -> CallRequest<M> {
        CallRequest { message, options }
    }
}

/// Coerces the supported invocation styles into a `CallRequest`.
///
/// Facade methods accept the bare message, a `(message, options)` pair, or
/// an explicit `CallRequest`; all three produce the identical wire request.
pub trait IntoCallRequest<M> {
    fn into_call_request(self) -> CallRequest<M>;
}

impl<M> IntoCallRequest<M> for M {
    fn into_call_request(self) -> CallRequest<M> {
        CallRequest::new(self)
    }
}

impl<M> IntoCallRequest<M> for (M, CallOptions) {
    fn into_call_request(self) -> CallRequest<M> {
        CallRequest::with_options(self.0, self.1)
    }
}

impl<M> IntoCallRequest<M> for CallRequest<M> {
    fn into_call_request(self) -> CallRequest<M> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_per_call_overrides() {
        let defaults = CallOptions::new()
            .with_timeout(Duration::from_secs(30))
            .with_retry(RetryConfig::default())
            .with_metadata("x-goog-user-project", "demo");
        let per_call = CallOptions::new()
            .with_timeout(Duration::from_secs(5))
            .with_metadata("x-goog-request-params", "parent=projects/p");

        let merged = per_call.merge_over(&defaults);
        assert_eq!(merged.timeout, Some(Duration::from_secs(5)));
        assert_eq!(merged.retry, Some(RetryConfig::default()));
        assert_eq!(
            merged.metadata,
            vec![
                ("x-goog-user-project".to_string(), "demo".to_string()),
                (
                    "x-goog-request-params".to_string(),
                    "parent=projects/p".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_merge_defaults_fallback() {
        let defaults = CallOptions::new().with_timeout(Duration::from_secs(30));
        let merged = CallOptions::new().merge_over(&defaults);
        assert_eq!(merged.timeout, Some(Duration::from_secs(30)));
        assert!(merged.retry.is_none());
    }

    #[test]
    fn test_into_call_request_styles() {
        let bare = "payload".into_call_request();
        assert_eq!(bare.message, "payload");
        assert_eq!(bare.options, CallOptions::default());

        let options = CallOptions::new().with_timeout(Duration::from_secs(1));
        let pair: CallRequest<&str> = ("payload", options.clone()).into_call_request();
        assert_eq!(pair.options.timeout, Some(Duration::from_secs(1)));

        let explicit: CallRequest<&str> = CallRequest::with_options("payload", options).into_call_request();
        assert_eq!(explicit.options.timeout, Some(Duration::from_secs(1)));
    }
}
