//! # infra_config: Overdraft Protection Configuration
//!
//! Handles loading of the dashboard's starting state from TOML files with
//! environment variable override support.
//!
//! ## File Layout
//!
//! ```toml
//! log_level = "info"
//!
//! [coverage]
//! enabled = true
//! auto_transfer = true
//! overdraft_limit = 1200
//! preferred_buffer = 250
//! scenario_amount = 540
//!
//! [alerts]
//! push = true
//! sms = true
//! email = false
//!
//! [account]
//! available_credit = 8700
//!
//! [[channels]]
//! id = "creditLine"
//! label = "Crescendo Reserve Credit"
//! description = "Covers checking instantly."
//! enabled = true
//! transfer_fee = 0
//! max_sweep = 1200
//! ```
//!
//! Every section is optional; missing values fall back to the dashboard
//! defaults.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `OVERDRAFT_COVERAGE_ENABLED` | `coverage.enabled` |
//! | `OVERDRAFT_LIMIT` | `coverage.overdraft_limit` |
//! | `OVERDRAFT_BUFFER` | `coverage.preferred_buffer` |
//! | `OVERDRAFT_SCENARIO` | `coverage.scenario_amount` |
//! | `OVERDRAFT_AVAILABLE_CREDIT` | `account.available_credit` |
//! | `OVERDRAFT_LOG_LEVEL` | `log_level` |

use std::path::Path;

use coverage_core::channel::{default_channels, CoverageChannel};
use coverage_core::state::{AlertPreferences, DashboardState};
use coverage_core::types::money::ensure_non_negative;
use coverage_core::types::{
    Amount, CoverageError, OVERDRAFT_LIMIT_RANGE, PREFERRED_BUFFER_RANGE, SCENARIO_AMOUNT_RANGE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log levels accepted in `log_level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Coverage controls section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoverageSection {
    /// Master coverage switch
    pub enabled: bool,
    /// Automatic evening sweeps
    pub auto_transfer: bool,
    /// Nightly sweep cap
    pub overdraft_limit: Amount,
    /// Checking cushion before a sweep triggers
    pub preferred_buffer: Amount,
    /// Projected overdraft for the scenario planner
    pub scenario_amount: Amount,
}

impl Default for CoverageSection {
    fn default() -> Self {
        let state = DashboardState::default();
        Self {
            enabled: state.coverage_enabled,
            auto_transfer: state.auto_transfer_enabled,
            overdraft_limit: state.overdraft_limit,
            preferred_buffer: state.preferred_buffer,
            scenario_amount: state.scenario_amount,
        }
    }
}

/// Account section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AccountSection {
    /// Override for the provider's available credit
    pub available_credit: Option<Amount>,
}

/// Overdraft protection configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OverdraftConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Coverage controls
    #[serde(default)]
    pub coverage: CoverageSection,

    /// Alert routes
    #[serde(default)]
    pub alerts: AlertPreferences,

    /// Account overrides
    #[serde(default)]
    pub account: AccountSection,

    /// Funding channels in priority order
    #[serde(default = "default_channels")]
    pub channels: Vec<CoverageChannel>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OverdraftConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            coverage: CoverageSection::default(),
            alerts: AlertPreferences::default(),
            account: AccountSection::default(),
            channels: default_channels(),
        }
    }
}

impl OverdraftConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    ///
    /// A file that exists but fails to read or parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading configuration");
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("OVERDRAFT_COVERAGE_ENABLED") {
            match parse_bool(&raw) {
                Some(enabled) => self.coverage.enabled = enabled,
                None => tracing::warn!(value = %raw, "ignoring OVERDRAFT_COVERAGE_ENABLED"),
            }
        }

        override_amount(&lookup, "OVERDRAFT_LIMIT", &mut self.coverage.overdraft_limit);
        override_amount(&lookup, "OVERDRAFT_BUFFER", &mut self.coverage.preferred_buffer);
        override_amount(&lookup, "OVERDRAFT_SCENARIO", &mut self.coverage.scenario_amount);

        if let Some(raw) = lookup("OVERDRAFT_AVAILABLE_CREDIT") {
            match raw.trim().parse::<Amount>() {
                Ok(value) => self.account.available_credit = Some(value),
                Err(_) => tracing::warn!(value = %raw, "ignoring OVERDRAFT_AVAILABLE_CREDIT"),
            }
        }

        if let Some(log_level) = lookup("OVERDRAFT_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        let ranged = [
            ("coverage.overdraft_limit", self.coverage.overdraft_limit, OVERDRAFT_LIMIT_RANGE),
            ("coverage.preferred_buffer", self.coverage.preferred_buffer, PREFERRED_BUFFER_RANGE),
            ("coverage.scenario_amount", self.coverage.scenario_amount, SCENARIO_AMOUNT_RANGE),
        ];
        for (field, value, range) in ranged {
            if let Err(e) = range.validate(field, value) {
                errors.push(e.to_string());
            }
        }

        for (idx, channel) in self.channels.iter().enumerate() {
            if channel.id.trim().is_empty() {
                errors.push(format!("channels[{}].id cannot be empty", idx));
            }
            if self.channels[..idx].iter().any(|c| c.id == channel.id) {
                errors.push(CoverageError::DuplicateChannel(channel.id.clone()).to_string());
            }
            let amounts = [
                ("transfer_fee", channel.transfer_fee),
                ("max_sweep", channel.max_sweep),
            ];
            for (name, value) in amounts {
                let field = format!("channels[{}].{}", idx, name);
                if let Err(e) = ensure_non_negative(&field, value) {
                    errors.push(e.to_string());
                }
            }
        }

        if let Some(credit) = self.account.available_credit {
            if let Err(e) = ensure_non_negative("account.available_credit", credit) {
                errors.push(e.to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Starting dashboard state described by this configuration
    pub fn dashboard_state(&self) -> Result<DashboardState, ConfigError> {
        let state = DashboardState {
            coverage_enabled: self.coverage.enabled,
            auto_transfer_enabled: self.coverage.auto_transfer,
            preferred_buffer: self.coverage.preferred_buffer,
            overdraft_limit: self.coverage.overdraft_limit,
            scenario_amount: self.coverage.scenario_amount,
            channels: self.channels.clone(),
            alerts: self.alerts,
        };
        Ok(state.validated()?)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn override_amount(lookup: &impl Fn(&str) -> Option<String>, key: &str, target: &mut Amount) {
    if let Some(raw) = lookup(key) {
        match raw.trim().parse::<Amount>() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!(key, value = %raw, "ignoring unparsable override"),
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors, one message per problem
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Settings rejected by the coverage core
    #[error("Invalid coverage settings: {0}")]
    Coverage(#[from] CoverageError),
}
