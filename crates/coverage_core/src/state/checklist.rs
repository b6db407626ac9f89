//! Coverage readiness checklist.

use crate::channel::active_channels;

use super::DashboardState;

/// Minimum number of enabled funding sources for a healthy setup.
pub const MIN_ACTIVE_CHANNELS: usize = 2;

/// One readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChecklistItem {
    /// Master coverage switch is on
    ReserveCreditEnabled,
    /// Automatic transfers are on
    AutomaticSweeps,
    /// At least [`MIN_ACTIVE_CHANNELS`] channels are enabled
    MultipleFundingSources,
    /// Push or SMS alerts are on
    RealtimeAlerts,
}

impl ChecklistItem {
    /// All items in display order
    pub const ALL: [ChecklistItem; 4] = [
        ChecklistItem::ReserveCreditEnabled,
        ChecklistItem::AutomaticSweeps,
        ChecklistItem::MultipleFundingSources,
        ChecklistItem::RealtimeAlerts,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReserveCreditEnabled => "Reserve credit enabled for same-day sweeps",
            Self::AutomaticSweeps => "Automatic sweeps scheduled each evening",
            Self::MultipleFundingSources => "At least two funding sources active",
            Self::RealtimeAlerts => "Real-time alert channel configured",
        }
    }

    /// Whether `state` satisfies this item
    pub fn is_done(&self, state: &DashboardState) -> bool {
        match self {
            Self::ReserveCreditEnabled => state.coverage_enabled,
            Self::AutomaticSweeps => state.auto_transfer_enabled,
            Self::MultipleFundingSources => {
                active_channels(&state.channels).count() >= MIN_ACTIVE_CHANNELS
            }
            Self::RealtimeAlerts => state.alerts.has_realtime(),
        }
    }
}

impl DashboardState {
    /// Every checklist item paired with its status.
    pub fn checklist(&self) -> Vec<(ChecklistItem, bool)> {
        ChecklistItem::ALL
            .iter()
            .map(|item| (*item, item.is_done(self)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{update, AlertChannel, DashboardAction};

    #[test]
    fn test_default_checklist_all_done() {
        let checklist = DashboardState::default().checklist();
        assert_eq!(checklist.len(), 4);
        assert!(checklist.iter().all(|(_, done)| *done));
    }

    #[test]
    fn test_single_channel_fails_funding_check() {
        let state = update(
            &DashboardState::default(),
            &DashboardAction::ToggleChannel("savings".to_string()),
        );
        assert!(!ChecklistItem::MultipleFundingSources.is_done(&state));
        assert!(ChecklistItem::ReserveCreditEnabled.is_done(&state));
    }

    #[test]
    fn test_alerts_check() {
        let state = [AlertChannel::Push, AlertChannel::Sms]
            .iter()
            .fold(DashboardState::default(), |s, c| {
                update(&s, &DashboardAction::ToggleAlert(*c))
            });
        assert!(!ChecklistItem::RealtimeAlerts.is_done(&state));
    }

    #[test]
    fn test_auto_transfer_check() {
        let state = update(&DashboardState::default(), &DashboardAction::ToggleAutoTransfer);
        assert!(!ChecklistItem::AutomaticSweeps.is_done(&state));
    }
}
