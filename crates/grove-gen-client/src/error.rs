//! Generation service client error types.

/// Errors from generation service calls.
#[derive(Debug, thiserror::Error)]
pub enum GenApiError {
    /// HTTP transport error (connect failure, timeout, ...).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// Endpoint being called.
        endpoint: String,
        /// Underlying reqwest error.
        source: reqwest::Error,
    },
    /// The generation service returned a non-2xx status.
    #[error("generation service {endpoint} returned {status}: {body}")]
    Api {
        /// Endpoint being called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// Acknowledgement body failed to deserialize.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// Endpoint being called.
        endpoint: String,
        /// Underlying reqwest error.
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
