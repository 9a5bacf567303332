//! Generation service client configuration.
//!
//! One base URL plus a request timeout. Absence of the URL is a normal
//! deployment state (artifact delivery still works without submission),
//! so `from_env` returns a typed error the caller can downgrade to a
//! warning rather than a startup failure.

use url::Url;

/// Configuration for connecting to the generation service.
#[derive(Debug, Clone)]
pub struct GenServiceConfig {
    /// Base URL of the generation service.
    pub base_url: Url,
    /// Request timeout in seconds. The submit call is the only
    /// networked call in the stack; it fails fast rather than hanging
    /// the submitting caller.
    pub timeout_secs: u64,
}

impl GenServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GROVE_GEN_URL` (required)
    /// - `GROVE_GEN_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("GROVE_GEN_URL").map_err(|_| ConfigError::MissingUrl)?;
        let base_url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidUrl("GROVE_GEN_URL".to_string(), e.to_string()))?;

        Ok(Self {
            base_url,
            timeout_secs: std::env::var("GROVE_GEN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Configuration pointing at an arbitrary base URL with a short
    /// timeout, for tests against local mock servers.
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 5,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `GROVE_GEN_URL` is not set.
    #[error("GROVE_GEN_URL environment variable is required")]
    MissingUrl,
    /// A URL variable did not parse.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_base_url_uses_short_timeout() {
        let cfg = GenServiceConfig::for_base_url("http://127.0.0.1:9500".parse().unwrap());
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9500/");
    }
}
