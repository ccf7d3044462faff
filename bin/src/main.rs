//! tickref CLI - Polygon ticker reference data sync.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod job;
mod output;

use output::Format;

#[derive(Parser)]
#[command(name = "tickref")]
#[command(about = "Sync the Polygon ticker reference listing to a flat file and a warehouse", long_about = None)]
#[command(version)]
struct Cli {
    /// Output file path. Defaults to tickers.<format>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Records requested per page
    #[arg(long, default_value = "1000")]
    page_size: u32,

    /// Consecutive rate-limit retries before giving up
    #[arg(long, default_value = "6")]
    max_retries: u32,

    /// Skip the warehouse load stage
    #[arg(long)]
    skip_warehouse: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = config::JobConfig::from_env();
    job::run(&cli, config).await
}

/// Installs the log subscriber. `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
