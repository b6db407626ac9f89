//! Alert preference bookkeeping. Delivery is handled elsewhere.

/// A notification route the customer can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlertChannel {
    /// Push notifications
    Push,
    /// SMS messages
    Sms,
    /// Email summaries
    Email,
}

impl AlertChannel {
    /// All routes in display order
    pub const ALL: [AlertChannel; 3] = [AlertChannel::Push, AlertChannel::Sms, AlertChannel::Email];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Push => "Push notifications",
            Self::Sms => "SMS messages",
            Self::Email => "Email summaries",
        }
    }
}

/// Which alert routes are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertPreferences {
    /// Push notifications
    pub push: bool,
    /// SMS messages
    pub sms: bool,
    /// Email summaries
    pub email: bool,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            push: true,
            sms: true,
            email: false,
        }
    }
}

impl AlertPreferences {
    /// Whether `channel` is switched on
    pub fn is_enabled(&self, channel: AlertChannel) -> bool {
        match channel {
            AlertChannel::Push => self.push,
            AlertChannel::Sms => self.sms,
            AlertChannel::Email => self.email,
        }
    }

    /// Copy with `channel` flipped
    pub fn toggled(&self, channel: AlertChannel) -> Self {
        let mut next = *self;
        match channel {
            AlertChannel::Push => next.push = !next.push,
            AlertChannel::Sms => next.sms = !next.sms,
            AlertChannel::Email => next.email = !next.email,
        }
        next
    }

    /// Push or SMS is on.
    pub fn has_realtime(&self) -> bool {
        self.push || self.sms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = AlertPreferences::default();
        assert!(prefs.is_enabled(AlertChannel::Push));
        assert!(prefs.is_enabled(AlertChannel::Sms));
        assert!(!prefs.is_enabled(AlertChannel::Email));
        assert!(prefs.has_realtime());
    }

    #[test]
    fn test_toggle_only_affects_one_route() {
        let prefs = AlertPreferences::default().toggled(AlertChannel::Email);
        assert!(prefs.email);
        assert!(prefs.push && prefs.sms);
    }

    #[test]
    fn test_email_only_is_not_realtime() {
        let prefs = AlertPreferences::default()
            .toggled(AlertChannel::Push)
            .toggled(AlertChannel::Sms)
            .toggled(AlertChannel::Email);
        assert!(!prefs.has_realtime());
    }
}
