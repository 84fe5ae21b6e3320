use cloudcall_core::retry::RetryConfig;
use serde::Deserialize;

/// Client-level defaults for the Data Transfer facade.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Endpoint override; defaults to the public service endpoint.
    pub endpoint: Option<String>,
    /// Pre-acquired OAuth access token.
    pub access_token: Option<String>,
    /// Applied to list requests that do not set a page size.
    pub page_size: Option<i32>,
    /// Per-call deadline in milliseconds.
    pub timeout_ms: Option<u64>,
    pub retry: Option<RetryConfig>,
}
