//! HTTP server for the payroll engine.
//!
//! Reads its settings from the environment, loads the statutory
//! configuration and serves the API until interrupted.

use std::process::ExitCode;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, ServerSettings};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match ServerSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("payroll-engine: {}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings.log_level);

    let loader = match ConfigLoader::load(&settings.config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            error!(config_dir = %settings.config_dir.display(), error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        country = %loader.metadata().country,
        rates_version = %loader.metadata().version,
        "Statutory configuration loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = match tokio::net::TcpListener::bind(settings.bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %settings.bind_addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(bind_addr = %settings.bind_addr, "Payroll engine listening");
    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    info!("Payroll engine stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
    }
}
