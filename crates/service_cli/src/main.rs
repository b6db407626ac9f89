//! Overdraft CLI - Command Line Coverage Evaluation
//!
//! This is the operational entry point for the overdraft protection tools.
//!
//! # Commands
//!
//! - `overdraft evaluate` - Potential coverage, uncovered balance and coverage ratio
//! - `overdraft plan --shortfall <amount>` - Sweep plan in channel priority order
//! - `overdraft checklist` - Coverage readiness checklist
//! - `overdraft check` - Validate configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the configuration
//! (`infra_config`), fixture account data (`overdraft_inputs`) and the
//! coverage engine (`coverage_core`) into a single command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use infra_config::OverdraftConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::{Context, OutputFormat, ScenarioArgs};

/// Overdraft protection coverage CLI
#[derive(Parser)]
#[command(name = "overdraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "overdraft.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute coverage and scenario exposure
    Evaluate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Plan sweeps for a shortfall
    Plan {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Shortfall to cover (defaults to the scenario amount)
        #[arg(short, long)]
        shortfall: Option<f64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show the coverage readiness checklist
    Checklist {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Validate configuration file and environment overrides
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins, then --verbose, then the configured level.
    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        OverdraftConfig::load_or_default(&cli.config)
            .map(|config| config.with_env_override().log_level)
            .unwrap_or_else(|_| "warn".to_string())
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Evaluate { scenario, format } => {
            let format: OutputFormat = format.parse()?;
            let ctx = Context::load(&cli.config, &scenario)?;
            commands::evaluate::run(&ctx, format)
        }
        Commands::Plan {
            scenario,
            shortfall,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let ctx = Context::load(&cli.config, &scenario)?;
            commands::plan::run(&ctx, shortfall, format)
        }
        Commands::Checklist { scenario, format } => {
            let format: OutputFormat = format.parse()?;
            let ctx = Context::load(&cli.config, &scenario)?;
            commands::checklist::run(&ctx, format)
        }
        Commands::Check => commands::check::run(&cli.config),
    }
}
