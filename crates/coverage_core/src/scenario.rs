//! Scenario evaluator: exposure left after a projected overdraft is swept.

use crate::types::money::debug_assert_non_negative;
use crate::types::{Amount, Percent};

/// Whether the projected overdraft is fully absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverageStatus {
    /// Nothing left uncovered
    FullyCovered,
    /// Part of the overdraft remains uncovered
    CoverageGap,
}

impl CoverageStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullyCovered => "Fully Covered",
            Self::CoverageGap => "Coverage Gap",
        }
    }
}

/// Result of evaluating a projected overdraft against available coverage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioOutcome {
    /// Portion of the overdraft that coverage cannot absorb
    pub uncovered: Amount,
    /// Share of the overdraft absorbed, capped at 100
    pub ratio_percent: Percent,
}

impl ScenarioOutcome {
    /// Coverage status derived from `uncovered`
    pub fn status(&self) -> CoverageStatus {
        if self.uncovered == 0.0 {
            CoverageStatus::FullyCovered
        } else {
            CoverageStatus::CoverageGap
        }
    }
}

/// Evaluate a projected overdraft of `scenario_amount` against `potential_coverage`.
///
/// - `uncovered = max(scenario_amount - potential_coverage, 0)`
/// - `ratio_percent = 0` when coverage is 0, else
///   `min(scenario_amount / potential_coverage * 100, 100)`
///
/// # Examples
/// ```
/// use coverage_core::evaluate_scenario;
///
/// let outcome = evaluate_scenario(540.0, 1200.0);
/// assert_eq!(outcome.uncovered, 0.0);
/// assert!((outcome.ratio_percent - 45.0).abs() < 1e-9);
///
/// let outcome = evaluate_scenario(540.0, 0.0);
/// assert_eq!(outcome.uncovered, 540.0);
/// assert_eq!(outcome.ratio_percent, 0.0);
/// ```
pub fn evaluate_scenario(scenario_amount: Amount, potential_coverage: Amount) -> ScenarioOutcome {
    debug_assert_non_negative("scenario_amount", scenario_amount);
    debug_assert_non_negative("potential_coverage", potential_coverage);

    let uncovered = (scenario_amount - potential_coverage).max(0.0);
    let ratio_percent = if potential_coverage == 0.0 {
        0.0
    } else {
        (scenario_amount / potential_coverage * 100.0).min(100.0)
    };

    ScenarioOutcome {
        uncovered,
        ratio_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fully_covered_scenario() {
        let outcome = evaluate_scenario(540.0, 1200.0);
        assert_eq!(outcome.uncovered, 0.0);
        assert_relative_eq!(outcome.ratio_percent, 45.0, epsilon = 1e-10);
        assert_eq!(outcome.status(), CoverageStatus::FullyCovered);
    }

    #[test]
    fn test_gap_scenario_caps_ratio() {
        let outcome = evaluate_scenario(2500.0, 1200.0);
        assert_eq!(outcome.uncovered, 1300.0);
        assert_eq!(outcome.ratio_percent, 100.0);
        assert_eq!(outcome.status(), CoverageStatus::CoverageGap);
        assert_eq!(outcome.status().label(), "Coverage Gap");
    }

    #[test]
    fn test_exact_cover() {
        let outcome = evaluate_scenario(1200.0, 1200.0);
        assert_eq!(outcome.uncovered, 0.0);
        assert_eq!(outcome.ratio_percent, 100.0);
    }

    #[test]
    fn test_zero_coverage_guard() {
        let outcome = evaluate_scenario(750.0, 0.0);
        assert_eq!(outcome.uncovered, 750.0);
        assert_eq!(outcome.ratio_percent, 0.0);
    }

    #[test]
    fn test_zero_scenario() {
        let outcome = evaluate_scenario(0.0, 1200.0);
        assert_eq!(outcome.uncovered, 0.0);
        assert_eq!(outcome.ratio_percent, 0.0);
    }
}
