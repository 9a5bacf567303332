//! # grove-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the grove artifact delivery API.
//! Binds to configurable port (default 8080).

use grove_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let config = AppConfig::from_env();

    // Attempt to create the generation service client from environment.
    let gen_client = match grove_gen_client::GenServiceConfig::from_env() {
        Ok(gen_config) => {
            tracing::info!(base_url = %gen_config.base_url, "Generation service client configured");
            Some(grove_gen_client::GenClient::new(gen_config)?)
        }
        Err(e) => {
            tracing::warn!(
                "Generation service client not configured: {e}. /v1/generate will return 503."
            );
            None
        }
    };

    let port = config.port;
    let state = AppState::with_config(config, gen_client);
    let app = grove_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("grove API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
