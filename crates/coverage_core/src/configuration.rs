//! Coverage configuration: the master switch, the nightly cap and the
//! ordered funding channels.

use crate::channel::{ensure_unique_ids, toggle_channel, CoverageChannel};
use crate::types::{Amount, CoverageError, OVERDRAFT_LIMIT_RANGE};

/// User-chosen coverage policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageConfiguration {
    /// Master switch for overdraft coverage
    pub coverage_enabled: bool,
    /// Global nightly cap on total coverage
    pub overdraft_limit: Amount,
    /// Funding channels in sweep priority order
    pub channels: Vec<CoverageChannel>,
}

impl CoverageConfiguration {
    /// Build a configuration, validating the limit and channel ids.
    ///
    /// The limit must lie within [`OVERDRAFT_LIMIT_RANGE`]; it is not snapped
    /// to the slider grid.
    ///
    /// # Examples
    /// ```
    /// use coverage_core::{channel::default_channels, CoverageConfiguration};
    ///
    /// let config = CoverageConfiguration::new(true, 1200.0, default_channels()).unwrap();
    /// assert_eq!(config.overdraft_limit, 1200.0);
    /// assert!(CoverageConfiguration::new(true, 50.0, default_channels()).is_err());
    /// ```
    pub fn new(
        coverage_enabled: bool,
        overdraft_limit: Amount,
        channels: Vec<CoverageChannel>,
    ) -> Result<Self, CoverageError> {
        let overdraft_limit = OVERDRAFT_LIMIT_RANGE.validate("overdraft_limit", overdraft_limit)?;
        ensure_unique_ids(&channels)?;
        Ok(Self {
            coverage_enabled,
            overdraft_limit,
            channels,
        })
    }

    /// Copy with channel `id` toggled.
    pub fn with_channel_toggled(&self, id: &str) -> Self {
        Self {
            channels: toggle_channel(&self.channels, id),
            ..self.clone()
        }
    }
}
