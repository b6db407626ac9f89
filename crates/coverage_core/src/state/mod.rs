//! Dashboard state and its transitions.
//!
//! The state is an immutable value. Every user event maps to one
//! [`DashboardAction`], and [`update`] returns the next state without
//! touching the previous one. Derived figures (coverage, exposure,
//! checklist) are recomputed from the state on demand.
//!
//! ```text
//! event ─► DashboardAction ─► update(&state, &action) ─► state'
//!                                                          │
//!                              summary(available_credit) ◄─┘
//! ```

mod alerts;
mod checklist;
mod summary;

pub use alerts::{AlertChannel, AlertPreferences};
pub use checklist::{ChecklistItem, MIN_ACTIVE_CHANNELS};
pub use summary::CoverageSummary;

use crate::channel::{default_channels, ensure_unique_ids, toggle_channel, CoverageChannel};
use crate::configuration::CoverageConfiguration;
use crate::types::money::ensure_non_negative;
use crate::types::{
    Amount, CoverageError, OVERDRAFT_LIMIT_RANGE, PREFERRED_BUFFER_RANGE, SCENARIO_AMOUNT_RANGE,
};

/// Complete user-controlled dashboard state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardState {
    /// Master coverage switch
    pub coverage_enabled: bool,
    /// Automatic evening sweeps
    pub auto_transfer_enabled: bool,
    /// Checking cushion before a sweep triggers
    pub preferred_buffer: Amount,
    /// Nightly sweep cap
    pub overdraft_limit: Amount,
    /// Projected overdraft for the scenario planner
    pub scenario_amount: Amount,
    /// Funding channels in priority order
    pub channels: Vec<CoverageChannel>,
    /// Alert routes
    pub alerts: AlertPreferences,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            coverage_enabled: true,
            auto_transfer_enabled: true,
            preferred_buffer: 250.0,
            overdraft_limit: 1200.0,
            scenario_amount: 540.0,
            channels: default_channels(),
            alerts: AlertPreferences::default(),
        }
    }
}

impl DashboardState {
    /// Validate a state assembled from untrusted input.
    ///
    /// Amounts must lie within their slider ranges; they are not snapped
    /// to the slider grid. Channel fees and sweep caps must be finite and
    /// non-negative.
    pub fn validated(self) -> Result<Self, CoverageError> {
        OVERDRAFT_LIMIT_RANGE.validate("overdraft_limit", self.overdraft_limit)?;
        PREFERRED_BUFFER_RANGE.validate("preferred_buffer", self.preferred_buffer)?;
        SCENARIO_AMOUNT_RANGE.validate("scenario_amount", self.scenario_amount)?;
        for channel in &self.channels {
            ensure_non_negative("transfer_fee", channel.transfer_fee)?;
            ensure_non_negative("max_sweep", channel.max_sweep)?;
        }
        ensure_unique_ids(&self.channels)?;
        Ok(self)
    }

    /// Coverage configuration view of this state.
    pub fn configuration(&self) -> CoverageConfiguration {
        CoverageConfiguration {
            coverage_enabled: self.coverage_enabled,
            overdraft_limit: self.overdraft_limit,
            channels: self.channels.clone(),
        }
    }
}

/// A single user-initiated change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DashboardAction {
    /// Flip the master coverage switch
    ToggleCoverage,
    /// Flip automatic transfers
    ToggleAutoTransfer,
    /// Move the nightly cap slider
    SetOverdraftLimit(Amount),
    /// Move the buffer slider
    SetPreferredBuffer(Amount),
    /// Move the scenario slider
    SetScenarioAmount(Amount),
    /// Flip a funding channel by id
    ToggleChannel(String),
    /// Flip an alert route
    ToggleAlert(AlertChannel),
}

/// Apply `action` to `state`, returning the next state.
///
/// Slider values are clamped and snapped to their range. Toggling an unknown
/// channel id leaves the state unchanged.
///
/// # Examples
/// ```
/// use coverage_core::state::{update, DashboardAction, DashboardState};
///
/// let state = DashboardState::default();
/// let next = update(&state, &DashboardAction::SetOverdraftLimit(9999.0));
/// assert_eq!(next.overdraft_limit, 3000.0);
/// assert_eq!(state.overdraft_limit, 1200.0);
/// ```
pub fn update(state: &DashboardState, action: &DashboardAction) -> DashboardState {
    tracing::debug!(?action, "applying dashboard action");

    match action {
        DashboardAction::ToggleCoverage => DashboardState {
            coverage_enabled: !state.coverage_enabled,
            ..state.clone()
        },
        DashboardAction::ToggleAutoTransfer => DashboardState {
            auto_transfer_enabled: !state.auto_transfer_enabled,
            ..state.clone()
        },
        DashboardAction::SetOverdraftLimit(value) => DashboardState {
            overdraft_limit: OVERDRAFT_LIMIT_RANGE.clamp(*value),
            ..state.clone()
        },
        DashboardAction::SetPreferredBuffer(value) => DashboardState {
            preferred_buffer: PREFERRED_BUFFER_RANGE.clamp(*value),
            ..state.clone()
        },
        DashboardAction::SetScenarioAmount(value) => DashboardState {
            scenario_amount: SCENARIO_AMOUNT_RANGE.clamp(*value),
            ..state.clone()
        },
        DashboardAction::ToggleChannel(id) => {
            if !state.channels.iter().any(|channel| &channel.id == id) {
                tracing::debug!(%id, "toggle ignored, no such channel");
            }
            DashboardState {
                channels: toggle_channel(&state.channels, id),
                ..state.clone()
            }
        }
        DashboardAction::ToggleAlert(channel) => DashboardState {
            alerts: state.alerts.toggled(*channel),
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_dashboard() {
        let state = DashboardState::default();
        assert!(state.coverage_enabled);
        assert!(state.auto_transfer_enabled);
        assert_eq!(state.preferred_buffer, 250.0);
        assert_eq!(state.overdraft_limit, 1200.0);
        assert_eq!(state.scenario_amount, 540.0);
        assert_eq!(state.channels.len(), 3);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(DashboardState::default().validated().is_ok());
    }

    #[test]
    fn test_validated_rejects_out_of_range_buffer() {
        let state = DashboardState {
            preferred_buffer: 10.0,
            ..DashboardState::default()
        };
        let err = state.validated().unwrap_err();
        assert!(matches!(err, CoverageError::OutOfRange { ref field, .. } if field == "preferred_buffer"));
    }

    #[test]
    fn test_validated_rejects_negative_max_sweep() {
        let mut state = DashboardState::default();
        state.channels[0].max_sweep = -500.0;
        let err = state.validated().unwrap_err();
        assert!(matches!(err, CoverageError::NegativeAmount { ref field, .. } if field == "max_sweep"));
    }

    #[test]
    fn test_validated_rejects_nan_transfer_fee() {
        let mut state = DashboardState::default();
        state.channels[1].transfer_fee = f64::NAN;
        assert!(state.validated().is_err());
    }

    #[test]
    fn test_toggle_coverage_twice_is_identity() {
        let state = DashboardState::default();
        let once = update(&state, &DashboardAction::ToggleCoverage);
        assert!(!once.coverage_enabled);
        assert_eq!(update(&once, &DashboardAction::ToggleCoverage), state);
    }

    #[test]
    fn test_sliders_clamp() {
        let state = DashboardState::default();
        assert_eq!(
            update(&state, &DashboardAction::SetPreferredBuffer(0.0)).preferred_buffer,
            50.0
        );
        assert_eq!(
            update(&state, &DashboardAction::SetScenarioAmount(2600.0)).scenario_amount,
            2500.0
        );
        assert_eq!(
            update(&state, &DashboardAction::SetOverdraftLimit(1500.0)).overdraft_limit,
            1500.0
        );
    }

    #[test]
    fn test_toggle_channel_action() {
        let state = DashboardState::default();
        let next = update(&state, &DashboardAction::ToggleChannel("external".to_string()));
        assert!(next.channels[2].enabled);
        assert_eq!(next.overdraft_limit, state.overdraft_limit);
    }

    #[test]
    fn test_toggle_unknown_channel_is_noop() {
        let state = DashboardState::default();
        let next = update(&state, &DashboardAction::ToggleChannel("crypto".to_string()));
        assert_eq!(next, state);
    }

    #[test]
    fn test_configuration_view() {
        let config = DashboardState::default().configuration();
        assert!(config.coverage_enabled);
        assert_eq!(config.overdraft_limit, 1200.0);
        assert_eq!(config.channels, default_channels());
    }
}
