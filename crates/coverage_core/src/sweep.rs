//! Sweep planning: which channels fund a shortfall, and at what cost.
//!
//! Sweeps follow channel priority order until the shortfall or the
//! potential coverage is exhausted, whichever is smaller.

use crate::configuration::CoverageConfiguration;
use crate::engine::compute_coverage;
use crate::types::money::debug_assert_non_negative;
use crate::types::Amount;

/// A single transfer from one channel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepLeg {
    /// Channel identifier
    pub channel_id: String,
    /// Channel display label
    pub label: String,
    /// Amount swept from this channel
    pub amount: Amount,
    /// Transfer fee charged for this leg
    pub fee: Amount,
}

/// Ordered set of transfers covering a shortfall.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPlan {
    /// Transfers in execution order
    pub legs: Vec<SweepLeg>,
    /// Sum of leg amounts
    pub total_swept: Amount,
    /// Sum of leg fees
    pub total_fees: Amount,
    /// Shortfall left after all legs
    pub residual_gap: Amount,
}

impl SweepPlan {
    /// Whether the plan leaves nothing uncovered
    pub fn is_complete(&self) -> bool {
        self.residual_gap == 0.0
    }
}

/// Plan the sweeps that would cover `shortfall` under `config` and `ceiling`.
///
/// The total swept equals `min(shortfall, compute_coverage(config, ceiling))`.
///
/// # Examples
/// ```
/// use coverage_core::{channel::default_channels, plan_sweeps, CoverageConfiguration};
///
/// let config = CoverageConfiguration::new(true, 3000.0, default_channels()).unwrap();
/// let plan = plan_sweeps(&config, 8700.0, 1500.0);
/// assert_eq!(plan.legs.len(), 2);
/// assert_eq!(plan.legs[0].amount, 1200.0);
/// assert_eq!(plan.legs[1].amount, 300.0);
/// assert_eq!(plan.total_fees, 2.0);
/// ```
pub fn plan_sweeps(config: &CoverageConfiguration, ceiling: Amount, shortfall: Amount) -> SweepPlan {
    debug_assert_non_negative("shortfall", shortfall);

    let coverage = compute_coverage(config, ceiling);
    let mut remaining = shortfall.min(coverage);
    let mut plan = SweepPlan::default();

    for channel in config.channels.iter().filter(|c| c.enabled) {
        if remaining <= 0.0 {
            break;
        }
        let amount = channel.max_sweep.min(remaining);
        if amount <= 0.0 {
            continue;
        }
        remaining -= amount;
        plan.total_swept += amount;
        plan.total_fees += channel.transfer_fee;
        plan.legs.push(SweepLeg {
            channel_id: channel.id.clone(),
            label: channel.label.clone(),
            amount,
            fee: channel.transfer_fee,
        });
    }

    plan.residual_gap = (shortfall - plan.total_swept).max(0.0);
    tracing::debug!(
        shortfall,
        coverage,
        legs = plan.legs.len(),
        swept = plan.total_swept,
        fees = plan.total_fees,
        "planned sweeps"
    );
    plan
}
