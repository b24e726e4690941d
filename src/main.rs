use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use finview::api::FinancialClient;
use finview::config::{Config, Overrides};
use finview::logging::{init_tracing, LOG_FILE_ENV};

/// Terminal browser for annual financial statements.
#[derive(Debug, Parser)]
#[command(name = "finview", version)]
struct Cli {
    /// Override the backend base URL (also FINVIEW_BACKEND_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path appended to the base URL
    #[arg(long, value_name = "PATH")]
    endpoint: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write tracing output to this file (also FINVIEW_LOG_FILE)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let log_file = cli
        .log_file
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from));
    if let Some(path) = &log_file {
        init_tracing(path)
            .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
    }

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let overrides = Overrides {
        base_url: cli.base_url,
        endpoint: cli.endpoint,
    };
    let config = Config::resolve(&config_path, &overrides, |key| std::env::var(key).ok())?;
    tracing::info!(path = %config_path.display(), base_url = %config.backend.base_url, "config resolved");

    let client = FinancialClient::new(&config)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    finview::ui::runtime::run(&config, client, runtime.handle())?;
    runtime.shutdown_background();
    Ok(())
}
