//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Architecture
//!
//! There is deliberately no in-process mutable state here. Artifact
//! resolution re-reads the filesystem on every request (the filesystem
//! is the source of truth), so requests never contend on locks. The
//! state holds only:
//! - the filesystem artifact store (a root path);
//! - an optional generation service client (absent means `/v1/generate`
//!   returns 503);
//! - configuration.

use std::path::PathBuf;

use grove_artifact::FsArtifactStore;
use grove_gen_client::GenClient;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Root directory containing the `img/`, `info/` and `obj/`
    /// artifact directories written by the external generator.
    pub artifact_root: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PORT` (default: 8080)
    /// - `GROVE_ARTIFACT_ROOT` (default: `.`)
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let artifact_root = std::env::var("GROVE_ARTIFACT_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self {
            port,
            artifact_root,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            artifact_root: PathBuf::from("."),
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Filesystem store rooted at `config.artifact_root`.
    pub store: FsArtifactStore,
    /// Generation service client. `None` when `GROVE_GEN_URL` is not
    /// configured; `/v1/generate` then returns 503 and the artifact
    /// endpoints keep working.
    pub gen_client: Option<GenClient>,
    /// Configuration the state was built from.
    pub config: AppConfig,
}

impl AppState {
    /// Create application state from configuration and an optional
    /// generation client.
    pub fn with_config(config: AppConfig, gen_client: Option<GenClient>) -> Self {
        Self {
            store: FsArtifactStore::new(&config.artifact_root),
            gen_client,
            config,
        }
    }

    /// Create application state with default configuration and no
    /// generation client.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
