//! # codechat-server
//!
//! HTTP backend for codechat.
//!
//! This binary provides:
//! - **Registration** by phone number, handing out a short user code
//! - **Friendships** between users, addressed by code
//! - **Messaging** between friends, with per-pair histories and a chat list
//!   showing each friend's latest message
//!
//! All state lives in memory and is lost on restart. Every API response is
//! `200 OK`; failures are reported through the `success` field.

mod api;
mod config;
mod error;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use codechat_shared::constants::APP_NAME;
use codechat_store::ChatStore;

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,codechat_server=debug")),
        )
        .init();

    info!("Starting {} server v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Build in-memory state
    // -----------------------------------------------------------------------
    let app_state = AppState {
        store: Arc::new(ChatStore::new()),
        config: Arc::new(config.clone()),
    };

    // -----------------------------------------------------------------------
    // 4. Run the HTTP API server (blocks until shutdown)
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(app_state, config.http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
