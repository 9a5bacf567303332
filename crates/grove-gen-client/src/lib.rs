#![deny(missing_docs)]

//! # grove-gen-client — Generation Service Client
//!
//! Typed reqwest client for the external plant generation service. The
//! service consumes a text prompt and *asynchronously* writes artifacts
//! (image, recommendation JSON, mesh) to the shared directories served
//! by `grove-api` — submission only acknowledges that the job was
//! accepted; it never waits for or confirms artifact production.
//!
//! Fire-and-forget semantics: one request, a conservative timeout, no
//! retries. Failures surface verbatim to the submitting caller, which
//! decides what to do with them.
//!
//! ## Wire Contract
//!
//! `POST {base_url}/process` with body `{"text": "<prompt>"}`. The
//! acknowledgement body is a small JSON document whose schema belongs
//! to the generation service; it is carried as an opaque
//! `serde_json::Value`.

pub mod config;
pub mod error;

pub use config::GenServiceConfig;
pub use error::GenApiError;

use std::time::Duration;

/// Client for the external generation service.
#[derive(Debug, Clone)]
pub struct GenClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl GenClient {
    /// Create a new client from configuration.
    pub fn new(config: GenServiceConfig) -> Result<Self, GenApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Submit a prompt to the generation service.
    ///
    /// Returns the service's acknowledgement body on 2xx. A non-success
    /// status becomes [`GenApiError::Api`] with the body preserved; a
    /// transport failure (including timeout) becomes
    /// [`GenApiError::Http`]. No retry is performed.
    pub async fn submit(&self, prompt: &str) -> Result<serde_json::Value, GenApiError> {
        let endpoint = "process";
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| GenApiError::Config(config::ConfigError::InvalidUrl(
                "GROVE_GEN_URL".to_string(),
                e.to_string(),
            )))?;

        tracing::info!(url = %url, "submitting prompt to generation service");

        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "text": prompt }))
            .send()
            .await
            .map_err(|e| GenApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenApiError::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| GenApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })
    }
}
