//! Coverage engine: how much can be swept tonight.
//!
//! Coverage is bounded by the most restrictive of three limits:
//! the user's nightly cap, the combined capacity of the enabled channels,
//! and the available credit reported by the account provider.
//!
//! ```text
//! potential_coverage = min(overdraft_limit, Σ enabled max_sweep, available_credit)
//! ```

use crate::channel::{active_channels, CoverageChannel};
use crate::configuration::CoverageConfiguration;
use crate::types::money::debug_assert_non_negative;
use crate::types::Amount;

/// Combined `max_sweep` of the enabled channels.
pub fn channel_capacity(channels: &[CoverageChannel]) -> Amount {
    active_channels(channels)
        .map(|channel| {
            debug_assert_non_negative("max_sweep", channel.max_sweep);
            channel.max_sweep
        })
        .sum()
}

/// Total deployable coverage for `config` under the credit `ceiling`.
///
/// Returns 0 when coverage is switched off, whatever the channels or ceiling.
///
/// # Examples
/// ```
/// use coverage_core::{channel::default_channels, compute_coverage, CoverageConfiguration};
///
/// let config = CoverageConfiguration::new(true, 1200.0, default_channels()).unwrap();
/// assert_eq!(compute_coverage(&config, 8700.0), 1200.0);
/// assert_eq!(compute_coverage(&config, 500.0), 500.0);
/// ```
pub fn compute_coverage(config: &CoverageConfiguration, ceiling: Amount) -> Amount {
    debug_assert_non_negative("overdraft_limit", config.overdraft_limit);
    debug_assert_non_negative("available_credit", ceiling);

    if !config.coverage_enabled {
        return 0.0;
    }

    let capacity = channel_capacity(&config.channels);
    let coverage = config.overdraft_limit.min(capacity).min(ceiling);
    tracing::trace!(
        limit = config.overdraft_limit,
        capacity,
        ceiling,
        coverage,
        "computed potential coverage"
    );
    coverage
}
