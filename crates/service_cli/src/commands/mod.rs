//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared pieces live here:
//! the loaded [`Context`], the scenario overrides every command accepts, and
//! the output format.

pub mod check;
pub mod checklist;
pub mod evaluate;
pub mod plan;

use std::path::Path;
use std::str::FromStr;

use clap::Args;
use coverage_core::channel::find_channel;
use coverage_core::prelude::*;
use coverage_core::types::money::ensure_non_negative;
use infra_config::OverdraftConfig;
use overdraft_inputs::prelude::*;
use tracing::{info, warn};

use crate::{CliError, Result};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

/// Adjustments applied on top of the configured state.
#[derive(Debug, Clone, Default, Args)]
pub struct ScenarioArgs {
    /// Switch coverage off for this run
    #[arg(long)]
    pub coverage_off: bool,

    /// Nightly overdraft limit (300-3000, step 50)
    #[arg(long)]
    pub limit: Option<f64>,

    /// Projected overdraft amount (100-2500, step 50)
    #[arg(long)]
    pub scenario: Option<f64>,

    /// Toggle a funding channel by id (repeatable)
    #[arg(long = "toggle", value_name = "CHANNEL_ID")]
    pub toggle: Vec<String>,

    /// Override the account's available credit
    #[arg(long)]
    pub available_credit: Option<f64>,
}

impl ScenarioArgs {
    /// Translate the overrides into dashboard actions.
    ///
    /// Unknown channel ids are rejected here, even though the reducer would
    /// ignore them, so typos do not go unnoticed.
    pub fn actions(&self, state: &DashboardState) -> Result<Vec<DashboardAction>> {
        let mut actions = Vec::new();

        if self.coverage_off && state.coverage_enabled {
            actions.push(DashboardAction::ToggleCoverage);
        }
        if let Some(limit) = self.limit {
            actions.push(DashboardAction::SetOverdraftLimit(limit));
        }
        if let Some(scenario) = self.scenario {
            actions.push(DashboardAction::SetScenarioAmount(scenario));
        }
        for id in &self.toggle {
            find_channel(&state.channels, id)
                .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
            actions.push(DashboardAction::ToggleChannel(id.clone()));
        }

        Ok(actions)
    }

    /// Apply the overrides to `state` through the reducer.
    pub fn apply(&self, state: &DashboardState) -> Result<DashboardState> {
        let next = self
            .actions(state)?
            .iter()
            .fold(state.clone(), |acc, action| update(&acc, action));

        if let Some(limit) = self.limit {
            if limit != next.overdraft_limit {
                warn!(requested = limit, applied = next.overdraft_limit, "limit adjusted to slider range");
            }
        }
        if let Some(scenario) = self.scenario {
            if scenario != next.scenario_amount {
                warn!(requested = scenario, applied = next.scenario_amount, "scenario adjusted to slider range");
            }
        }

        Ok(next)
    }
}

/// Everything a command needs: configured state and account data.
#[derive(Debug, Clone)]
pub struct Context {
    /// Dashboard state after overrides
    pub state: DashboardState,
    /// Account snapshot supplying the coverage ceiling
    pub account: AccountSnapshot,
    /// Masked card number for headings
    pub card: String,
}

impl Context {
    /// Load configuration from `config_path` (or defaults) and apply `args`.
    pub fn load(config_path: &Path, args: &ScenarioArgs) -> Result<Self> {
        let config = OverdraftConfig::load_with_env_and_validate(config_path)?;
        Self::from_config(&config, args)
    }

    /// Build the context from an already-loaded configuration.
    pub fn from_config(config: &OverdraftConfig, args: &ScenarioArgs) -> Result<Self> {
        let state = args.apply(&config.dashboard_state()?)?;

        let mut provider = CrescendoFixture::new();
        if let Some(credit) = args.available_credit.or(config.account.available_credit) {
            ensure_non_negative("available_credit", credit)
                .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
            provider = provider.with_available_credit(credit);
        }

        info!(
            institution = %provider.snapshot().institution,
            available_credit = provider.available_credit(),
            "account loaded"
        );

        Ok(Self {
            state,
            account: provider.snapshot(),
            card: provider.masked_card_number(),
        })
    }

    /// Coverage ceiling from the account provider
    pub fn available_credit(&self) -> Amount {
        self.account.available_credit
    }

    /// Derived coverage figures
    pub fn summary(&self) -> CoverageSummary {
        self.state.summary(self.available_credit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(args: &ScenarioArgs) -> Context {
        Context::from_config(&OverdraftConfig::default(), args).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_context() {
        let ctx = context(&ScenarioArgs::default());
        assert_eq!(ctx.available_credit(), 8700.0);
        assert_eq!(ctx.summary().potential_coverage, 1200.0);
    }

    #[test]
    fn test_overrides_flow_through_reducer() {
        let args = ScenarioArgs {
            limit: Some(2990.0),
            scenario: Some(2400.0),
            toggle: vec!["external".to_string()],
            ..ScenarioArgs::default()
        };
        let ctx = context(&args);
        assert_eq!(ctx.state.overdraft_limit, 3000.0);
        assert_eq!(ctx.summary().potential_coverage, 3000.0);
        assert_eq!(ctx.summary().uncovered, 0.0);
    }

    #[test]
    fn test_coverage_off() {
        let args = ScenarioArgs {
            coverage_off: true,
            ..ScenarioArgs::default()
        };
        let summary = context(&args).summary();
        assert_eq!(summary.potential_coverage, 0.0);
        assert_eq!(summary.uncovered, 540.0);
    }

    #[test]
    fn test_unknown_toggle_rejected() {
        let args = ScenarioArgs {
            toggle: vec!["crypto".to_string()],
            ..ScenarioArgs::default()
        };
        let err = Context::from_config(&OverdraftConfig::default(), &args).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(ref msg) if msg.contains("crypto")));
    }

    #[test]
    fn test_available_credit_override() {
        let args = ScenarioArgs {
            available_credit: Some(600.0),
            ..ScenarioArgs::default()
        };
        assert_eq!(context(&args).summary().potential_coverage, 600.0);
    }

    #[test]
    fn test_negative_available_credit_rejected() {
        let args = ScenarioArgs {
            available_credit: Some(-1.0),
            ..ScenarioArgs::default()
        };
        assert!(Context::from_config(&OverdraftConfig::default(), &args).is_err());
    }

    #[test]
    fn test_nan_available_credit_rejected() {
        let args = ScenarioArgs {
            available_credit: Some(f64::NAN),
            ..ScenarioArgs::default()
        };
        let err = Context::from_config(&OverdraftConfig::default(), &args).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(ref msg) if msg.contains("available_credit")));
    }
}
