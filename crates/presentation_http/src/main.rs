//! Meeting minutes HTTP server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use infrastructure::{AppConfig, DEFAULT_LOG_FILTER, LogFormat, init_logging};
use presentation_http::{AppState, create_app};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    let log_format: LogFormat = config.server.log_format.parse()?;
    init_logging(log_format, DEFAULT_LOG_FILTER)?;

    info!("Meeting minutes server v{} starting", env!("CARGO_PKG_VERSION"));

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        timezone = %config.email.timezone,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)?;
    let app = create_app(state, &config.server);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("OpenAPI document: http://{}/openapi.json", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    // In-flight requests get `timeout` to finish before the process exits
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::warn!(?timeout, "Connections still open after shutdown timeout, exiting");
        std::process::exit(1);
    });
}
