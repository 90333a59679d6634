//! YAAYA chat server and CLI entry point.
//!
//! Binary name: `yaaya`
//!
//! Parses CLI arguments, sets up tracing, wires the chat service, then
//! either serves HTTP (the default) or answers a single message.

mod cli;
mod http;
mod state;

use clap::Parser;
use tracing::{info, warn};

use cli::{Cli, Commands, Settings};
use state::AppState;
use yaaya_observe::tracing_setup::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.default_log_filter(), cli.settings.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let state = AppState::init(&cli.settings).await?;

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(state, &cli.settings).await,
        Commands::Ask { message } => cli::ask::ask(&state, &message.join(" ")).await,
    };

    shutdown_tracing();
    result
}

async fn serve(state: AppState, settings: &Settings) -> anyhow::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        addr = %listener.local_addr()?,
        mode = state.mode(),
        "YAAYA listening"
    );

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
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
