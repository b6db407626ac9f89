//! # coverage_core: Overdraft Coverage Engine
//!
//! ## Role
//!
//! coverage_core is the bottom layer of the overdraft protection workspace, providing:
//! - Coverage engine: deployable coverage from policy, channels and credit (`engine`)
//! - Scenario evaluator: uncovered balance and coverage ratio (`scenario`)
//! - Funding channels and the toggle transition (`channel`)
//! - Sweep planning in channel priority order (`sweep`)
//! - Immutable dashboard state with a single reducer (`state`)
//! - Amount/percent types, slider ranges and errors (`types`)
//!
//! Everything here is pure and synchronous. The account ceiling comes from the
//! caller; this crate never fetches data.
//!
//! ## Usage Examples
//!
//! ```rust
//! use coverage_core::prelude::*;
//!
//! let config = CoverageConfiguration::new(true, 1200.0, default_channels()).unwrap();
//! let coverage = compute_coverage(&config, 8700.0);
//! assert_eq!(coverage, 1200.0);
//!
//! let outcome = evaluate_scenario(540.0, coverage);
//! assert_eq!(outcome.uncovered, 0.0);
//! # assert!((outcome.ratio_percent - 45.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for all public data types

pub mod channel;
pub mod configuration;
pub mod engine;
pub mod format;
pub mod scenario;
pub mod state;
pub mod sweep;
pub mod types;

pub use channel::{toggle_channel, ChannelState, CoverageChannel};
pub use configuration::CoverageConfiguration;
pub use engine::{channel_capacity, compute_coverage};
pub use scenario::{evaluate_scenario, CoverageStatus, ScenarioOutcome};
pub use sweep::{plan_sweeps, SweepLeg, SweepPlan};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::channel::{default_channels, toggle_channel, ChannelState, CoverageChannel};
    pub use crate::configuration::CoverageConfiguration;
    pub use crate::engine::{channel_capacity, compute_coverage};
    pub use crate::scenario::{evaluate_scenario, CoverageStatus, ScenarioOutcome};
    pub use crate::state::{
        update, AlertChannel, AlertPreferences, ChecklistItem, CoverageSummary, DashboardAction,
        DashboardState,
    };
    pub use crate::sweep::{plan_sweeps, SweepPlan};
    pub use crate::types::{Amount, CoverageError, Percent};
}
