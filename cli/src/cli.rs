//! Command-line arguments

use clap::Parser;
use sales_dashboard_core_rs::Timeframe;
use std::path::PathBuf;

/// Sales Dashboard - render mock sales analytics in the terminal
#[derive(Parser, Debug)]
#[command(name = "sales-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Day range of the sales series (7, 30 or 90)
    #[arg(short, long)]
    pub days: Option<Timeframe>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run one refresh cycle before rendering
    #[arg(long)]
    pub refresh: bool,

    /// Override the simulated refresh latency
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Regenerate the order list before rendering
    #[arg(long)]
    pub reload_orders: bool,

    /// Order table page to show (0-based)
    #[arg(short, long, default_value_t = 0)]
    pub page: usize,
}

#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
