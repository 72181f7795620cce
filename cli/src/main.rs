//! Sales Dashboard CLI
//!
//! Renders the mock sales dashboard in the terminal.
//!
//! Usage:
//!   sales-dashboard [--days 7|30|90] [--seed N] [--refresh] [--format table|json]
//!   sales-dashboard --config dashboard.json --refresh --delay-ms 500

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use sales_dashboard_core_rs::{DashboardConfig, RefreshOrchestrator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&cli)?;
    let page_size = config.table_page_size;
    let mut dashboard = RefreshOrchestrator::new(config).context("failed to build dashboard")?;

    if cli.reload_orders {
        dashboard.reload_orders()?;
    }

    if cli.refresh {
        dashboard.start_refresh()?;
        dashboard.wait_for_refresh().await?;
    }

    let snapshot = dashboard.snapshot();
    tracing::info!(generation = snapshot.generation, "rendering snapshot");
    match cli.format {
        OutputFormat::Json => println!("{}", snapshot.to_json()?),
        OutputFormat::Table => print!("{}", render::render_table(&snapshot, cli.page, page_size)),
    }

    dashboard.dispose();
    Ok(())
}

/// File config (if any) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            DashboardConfig::from_json_str(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => DashboardConfig::default(),
    };

    if let Some(days) = cli.days {
        config.default_timeframe = days;
    }
    if let Some(seed) = cli.seed {
        config.rng_seed = Some(seed);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.refresh_delay_ms = delay_ms;
    }
    config.validate()?;
    Ok(config)
}
