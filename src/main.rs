//! Ember Chat - self-hosted AI chat backend
//!
//! A Rust backend implementing the conversation session state machine
//! behind a browser chat surface that talks to a remote text-generation
//! endpoint.

mod api;
mod config;
mod connectivity;
mod gateway;
mod runtime;
mod session;
mod timefmt;

use api::{create_router, AppState};
use config::Config;
use connectivity::ConnectivityMonitor;
use gateway::GatewayClient;
use runtime::SessionRuntime;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ember_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = Config::from_env();
    tracing::info!(
        endpoint = %config.endpoint,
        history_window = config.history_window,
        "Configuration loaded"
    );

    // Connectivity gate, seeded from the environment's current assumption
    let connectivity = Arc::new(ConnectivityMonitor::new(config.assume_online));

    // Session runtime with the production gateway client
    let client = GatewayClient::new(&config);
    let (session_runtime, session) =
        SessionRuntime::new(client, Arc::clone(&connectivity), &config);
    tokio::spawn(session_runtime.run());

    // Create application state
    let state = AppState::new(session, connectivity);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new().gzip(true).br(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Ember Chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
