//! Overdraft TUI Entry Point

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use infra_config::OverdraftConfig;
use overdraft_gui::prelude::*;
use overdraft_inputs::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging goes to a file only; stdout belongs to the terminal UI.
fn init_tracing(log_level: &str) -> Result<()> {
    let Ok(path) = std::env::var("OVERDRAFT_LOG_FILE") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {}", path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config_path = std::env::var("OVERDRAFT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("overdraft.toml"));
    let config = OverdraftConfig::load_with_env_and_validate(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    init_tracing(&config.log_level)?;

    let mut provider = CrescendoFixture::new();
    if let Some(credit) = config.account.available_credit {
        provider = provider.with_available_credit(credit);
    }

    let dashboard = Dashboard::new(
        config.dashboard_state()?,
        &provider,
        &FixtureActivityFeed::new(),
    );
    tracing::info!(path = %config_path.display(), "starting dashboard");

    let mut app = TuiApp::new(dashboard)?;
    app.run()?;

    Ok(())
}
