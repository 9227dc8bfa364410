mod app;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::App;
use crate::config::AppConfig;

/// Calculation server - arithmetic with per-expression usage counts
#[derive(Parser)]
#[command(name = "calc-server")]
#[command(about = "Calculation server - arithmetic with per-expression usage counts")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database for the counter
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref()
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // defaults -> YAML (if provided) -> env (CALC__*) -> CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.mock)?;

    let _log_guard = calckit::init_logging(&config.logging, cli.verbose);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.validate()?;
    println!("Configuration is valid");
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    config.validate()?;
    tracing::info!(mock = config.counter.database.dsn.contains(":memory:"), "calc-server starting");

    let app = App::build(&config).await?;
    app::serve(&app, &config.server).await
}
