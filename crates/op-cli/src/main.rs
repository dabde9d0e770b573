//! op-dash
//!
//! Prints OpenProject dashboard views (burndown, workload, team, summary,
//! task lists) as JSON.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use op_auth::SessionManager;
use op_client::ApiClient;
use op_core::config::{DashboardConfig, LoggingConfig};
use op_core::traits::FixedClock;
use op_core::OpError;
use op_services::ServiceContext;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config)?;
    config.check()?;

    init_tracing(&config.logging);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting op-dash");

    let sessions = SessionManager::new();
    let session = sessions.login(&config.api)?;

    let client = ApiClient::new(session, &config.api)?;
    let mut context = ServiceContext::new(Arc::new(client));
    if let Some(date) = cli.as_of {
        info!(%date, "Evaluating as of a fixed date");
        context = context.with_clock(FixedClock::at_date(date));
    }

    let output = match commands::run(&cli.command, context, &config).await {
        Ok(output) => output,
        Err(err) => {
            if let Some(op_error) = err.downcast_ref::<OpError>() {
                error!(
                    code = op_error.error_code(),
                    status = op_error.status_code(),
                    error = %op_error,
                    "Command failed"
                );
            }
            return Err(err);
        }
    };
    let rendered = if cli.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{rendered}");

    sessions.logout();
    Ok(())
}

/// Initialize tracing/logging on stderr; stdout carries the JSON output
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
