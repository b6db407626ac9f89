//! Derived coverage figures for rendering.

use crate::channel::active_channels;
use crate::engine::{channel_capacity, compute_coverage};
use crate::scenario::{evaluate_scenario, CoverageStatus};
use crate::types::{Amount, Percent};

use super::DashboardState;

/// Everything the dashboard derives from state and the credit ceiling.
///
/// Recomputed from scratch on every call; nothing here is cached in state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageSummary {
    /// Number of enabled channels
    pub active_channels: usize,
    /// Combined `max_sweep` of enabled channels
    pub channel_capacity: Amount,
    /// Deployable coverage after all caps
    pub potential_coverage: Amount,
    /// Projected overdraft being evaluated
    pub scenario_amount: Amount,
    /// Portion of the scenario left uncovered
    pub uncovered: Amount,
    /// Coverage ratio, capped at 100
    pub ratio_percent: Percent,
    /// Fully covered or gap
    pub status: CoverageStatus,
}

impl DashboardState {
    /// Derive the coverage summary under `available_credit`.
    ///
    /// # Examples
    /// ```
    /// use coverage_core::state::DashboardState;
    ///
    /// let summary = DashboardState::default().summary(8700.0);
    /// assert_eq!(summary.potential_coverage, 1200.0);
    /// assert_eq!(summary.uncovered, 0.0);
    /// ```
    pub fn summary(&self, available_credit: Amount) -> CoverageSummary {
        let config = self.configuration();
        let potential_coverage = compute_coverage(&config, available_credit);
        let outcome = evaluate_scenario(self.scenario_amount, potential_coverage);

        CoverageSummary {
            active_channels: active_channels(&self.channels).count(),
            channel_capacity: channel_capacity(&self.channels),
            potential_coverage,
            scenario_amount: self.scenario_amount,
            uncovered: outcome.uncovered,
            ratio_percent: outcome.ratio_percent,
            status: outcome.status(),
        }
    }
}
