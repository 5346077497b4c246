//! Service lifecycle
//!
//! Wires config, store, and router together, and runs the HTTP server until
//! a shutdown signal arrives.

use anyhow::Result;
use log::info;
use std::sync::Arc;
use tokio::signal;

pub mod http;

use crate::config::Config;
use crate::graph::BoltStore;
use http::router::create_router;
use http::state::AppState;

pub async fn start_service(config: Config) -> Result<()> {
    let store = BoltStore::connect(&config).await?;
    info!("Connected to graph store at {}", config.bolt_uri);

    let state = AppState::new(Arc::new(store));
    let router = create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
