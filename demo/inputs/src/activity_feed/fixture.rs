//! Fixed activity feed for the Crescendo Bank fixture account.

use chrono::{NaiveDate, NaiveDateTime};

use super::{ActivityFeed, ActivityRecord, ActivityStatus};

/// Three recent coverage events.
#[derive(Debug, Clone, Default)]
pub struct FixtureActivityFeed;

impl FixtureActivityFeed {
    /// Create the fixture feed
    pub fn new() -> Self {
        Self
    }
}

fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

impl ActivityFeed for FixtureActivityFeed {
    fn recent(&self) -> Vec<ActivityRecord> {
        vec![
            ActivityRecord {
                id: "a1".to_string(),
                title: "Coverage sweep from credit line".to_string(),
                timestamp: at(4, 8, 18, 22),
                amount: 260.32,
                status: ActivityStatus::Settled,
                reference: "ACH-82741".to_string(),
            },
            ActivityRecord {
                id: "a2".to_string(),
                title: "Alert acknowledged".to_string(),
                timestamp: at(4, 7, 9, 14),
                amount: 0.0,
                status: ActivityStatus::Confirmed,
                reference: "ALRT-11293".to_string(),
            },
            ActivityRecord {
                id: "a3".to_string(),
                title: "Linked account utilization check".to_string(),
                timestamp: at(4, 4, 11, 5),
                amount: 0.0,
                status: ActivityStatus::Completed,
                reference: "AUD-99054".to_string(),
            },
        ]
    }
}
