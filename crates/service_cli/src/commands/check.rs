//! Check command implementation
//!
//! Validates the configuration file and environment overrides.

use std::path::Path;

use infra_config::{ConfigError, OverdraftConfig};
use tracing::{error, info};

use crate::Result;

/// Run the check command
pub fn run(config_path: &Path) -> Result<()> {
    info!("Checking configuration at {}", config_path.display());

    let config = OverdraftConfig::load_or_default(config_path)?.with_env_override();
    match config.validate() {
        Ok(()) => {
            let state = config.dashboard_state()?;
            println!("Configuration OK");
            println!("  Coverage: {}", if state.coverage_enabled { "enabled" } else { "disabled" });
            println!("  Overdraft limit: {}", state.overdraft_limit);
            println!("  Channels: {}", state.channels.len());
            Ok(())
        }
        Err(ConfigError::Validation(errors)) => {
            for problem in &errors {
                error!("{}", problem);
            }
            Err(ConfigError::Validation(errors).into())
        }
        Err(other) => Err(other.into()),
    }
}
