//! Error types surfaced by the fetch wrappers, config parsing and DOM glue.
//!
//! ERROR HANDLING
//! ==============
//! Wrappers return these instead of logging so a caller can decide whether to
//! surface a failure. The page-level entry points choose to swallow and log.

/// Failure talking to the session endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0} is only reachable from a browser")]
    Unavailable(String),
}

/// Invalid page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Missing browser globals or a failed DOM call.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom call failed: {0}")]
    Js(String),
}
