use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use rbfs_core::constants::{DEFAULT_REST_ADDR, REST_ADDR_KEY};
use rbfs_core::{store, StoreConfig};

/// Main entry point for the RBFS application
///
/// Starts the REST server and serves until `Ctrl+C` or `SIGTERM`, then drains in-flight
/// requests and closes the store.
///
/// # Environment Variables
/// - `RBFS_REST_ADDR`: REST server address (default: "0.0.0.0:3002")
/// - `RBFS_STORE`: `mysql` (default) or `memory`
/// - `RBFS_DB_*`: MySQL connection and pool settings, see `rbfs_core::constants`
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid or the listener cannot bind
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rbfs_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("rbfs_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var(REST_ADDR_KEY)
        .unwrap_or_else(|_| DEFAULT_REST_ADDR.into())
        .parse()?;
    let cfg = StoreConfig::from_env()?;
    let store = store::open(&cfg);

    let app = api_rest::router(AppState::new(store.clone()));
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;

    tracing::info!("++ Starting RBFS REST on {}", rest_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Shutting down, closing store");
    store.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
