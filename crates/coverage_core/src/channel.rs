//! Coverage channels: the funding sources a sweep can draw from.
//!
//! Channels are kept in priority order. The only state change a channel
//! supports is enabling or disabling it; fee and sweep cap are fixed.

use crate::types::money::ensure_non_negative;
use crate::types::{Amount, CoverageError};

/// Two-state machine for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelState {
    /// Channel participates in sweeps
    Active,
    /// Channel is skipped
    Off,
}

impl ChannelState {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Off => "Off",
        }
    }
}

/// A funding source that can be swept into checking to cover a shortfall.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageChannel {
    /// Unique identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Short description of how the channel sweeps
    pub description: String,
    /// Whether the channel participates in sweeps
    pub enabled: bool,
    /// Flat fee charged per transfer
    pub transfer_fee: Amount,
    /// Maximum amount this channel can contribute
    pub max_sweep: Amount,
}

impl CoverageChannel {
    /// Create a channel, rejecting negative fee or cap.
    ///
    /// # Examples
    /// ```
    /// use coverage_core::CoverageChannel;
    ///
    /// let savings = CoverageChannel::new("savings", "Savings", "", true, 2.0, 800.0).unwrap();
    /// assert_eq!(savings.max_sweep, 800.0);
    /// assert!(CoverageChannel::new("bad", "Bad", "", true, -1.0, 800.0).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        enabled: bool,
        transfer_fee: Amount,
        max_sweep: Amount,
    ) -> Result<Self, CoverageError> {
        Ok(Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            enabled,
            transfer_fee: ensure_non_negative("transfer_fee", transfer_fee)?,
            max_sweep: ensure_non_negative("max_sweep", max_sweep)?,
        })
    }

    /// Current state of the channel
    pub fn state(&self) -> ChannelState {
        if self.enabled {
            ChannelState::Active
        } else {
            ChannelState::Off
        }
    }

    /// Copy of this channel with `enabled` inverted.
    pub fn toggled(&self) -> Self {
        Self {
            enabled: !self.enabled,
            ..self.clone()
        }
    }
}

/// Return a new sequence with the `enabled` flag of channel `id` inverted.
///
/// Every other channel and field is carried over unchanged. An unknown `id`
/// yields an unchanged copy.
///
/// # Examples
/// ```
/// use coverage_core::channel::{default_channels, toggle_channel};
///
/// let channels = default_channels();
/// let toggled = toggle_channel(&channels, "external");
/// assert!(toggled[2].enabled);
/// assert_eq!(toggle_channel(&toggled, "external"), channels);
/// ```
pub fn toggle_channel(channels: &[CoverageChannel], id: &str) -> Vec<CoverageChannel> {
    channels
        .iter()
        .map(|channel| {
            if channel.id == id {
                channel.toggled()
            } else {
                channel.clone()
            }
        })
        .collect()
}

/// Channels with `enabled == true`, in priority order.
pub fn active_channels(channels: &[CoverageChannel]) -> impl Iterator<Item = &CoverageChannel> {
    channels.iter().filter(|channel| channel.enabled)
}

/// Strict lookup by id.
pub fn find_channel<'a>(
    channels: &'a [CoverageChannel],
    id: &str,
) -> Result<&'a CoverageChannel, CoverageError> {
    channels
        .iter()
        .find(|channel| channel.id == id)
        .ok_or_else(|| CoverageError::UnknownChannel(id.to_string()))
}

/// Reject sequences in which two channels share an id.
pub fn ensure_unique_ids(channels: &[CoverageChannel]) -> Result<(), CoverageError> {
    for (idx, channel) in channels.iter().enumerate() {
        if channels[..idx].iter().any(|earlier| earlier.id == channel.id) {
            return Err(CoverageError::DuplicateChannel(channel.id.clone()));
        }
    }
    Ok(())
}

/// The three funding sources offered with a Crescendo Reserve account.
pub fn default_channels() -> Vec<CoverageChannel> {
    vec![
        CoverageChannel {
            id: "creditLine".to_string(),
            label: "Crescendo Reserve Credit".to_string(),
            description:
                "Covers the primary checking account instantly with no interest for 30 days."
                    .to_string(),
            enabled: true,
            transfer_fee: 0.0,
            max_sweep: 1200.0,
        },
        CoverageChannel {
            id: "savings".to_string(),
            label: "High-Yield Savings · 0.45% APY".to_string(),
            description: "Pulls from savings if the credit reserve has been exhausted."
                .to_string(),
            enabled: true,
            transfer_fee: 2.0,
            max_sweep: 800.0,
        },
        CoverageChannel {
            id: "external".to_string(),
            label: "Linked Brokerage Account".to_string(),
            description: "Initiates next-business-day transfer after approval if needed."
                .to_string(),
            enabled: false,
            transfer_fee: 5.0,
            max_sweep: 2500.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_target() {
        let channels = default_channels();
        let toggled = toggle_channel(&channels, "savings");

        assert!(!toggled[1].enabled);
        assert_eq!(toggled[0], channels[0]);
        assert_eq!(toggled[2], channels[2]);
        assert_eq!(toggled[1].max_sweep, channels[1].max_sweep);
        assert_eq!(toggled[1].transfer_fee, channels[1].transfer_fee);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let channels = default_channels();
        assert_eq!(toggle_channel(&channels, "crypto"), channels);
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let channels = default_channels();
        let _ = toggle_channel(&channels, "creditLine");
        assert!(channels[0].enabled);
    }

    #[test]
    fn test_toggle_empty_sequence() {
        assert!(toggle_channel(&[], "savings").is_empty());
    }

    #[test]
    fn test_channel_state() {
        let channels = default_channels();
        assert_eq!(channels[0].state(), ChannelState::Active);
        assert_eq!(channels[2].state(), ChannelState::Off);
        assert_eq!(channels[2].state().label(), "Off");
        assert_eq!(channels[2].toggled().state(), ChannelState::Active);
    }

    #[test]
    fn test_active_channels_preserves_order() {
        let ids: Vec<_> = active_channels(&default_channels())
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec!["creditLine", "savings"]);
    }

    #[test]
    fn test_find_channel() {
        let channels = default_channels();
        assert_eq!(find_channel(&channels, "savings").unwrap().max_sweep, 800.0);
        assert_eq!(
            find_channel(&channels, "crypto"),
            Err(CoverageError::UnknownChannel("crypto".to_string()))
        );
    }

    #[test]
    fn test_ensure_unique_ids() {
        let mut channels = default_channels();
        assert!(ensure_unique_ids(&channels).is_ok());

        channels.push(channels[0].clone());
        assert_eq!(
            ensure_unique_ids(&channels),
            Err(CoverageError::DuplicateChannel("creditLine".to_string()))
        );
    }
}
