//! Activity feed providers.
//!
//! Activity records are display-only; nothing in the coverage engine reads them.

mod fixture;

pub use fixture::FixtureActivityFeed;

use chrono::NaiveDateTime;
use coverage_core::types::Amount;
use serde::{Deserialize, Serialize};

/// Trait for activity feeds
pub trait ActivityFeed: Send + Sync {
    /// Recent activity, newest first
    fn recent(&self) -> Vec<ActivityRecord>;
}

/// Processing status of an activity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    /// Transfer has settled
    Settled,
    /// Customer confirmed
    Confirmed,
    /// Check completed
    Completed,
}

impl ActivityStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Settled => "Settled",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
        }
    }
}

/// A single entry in the activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Record identifier
    pub id: String,
    /// Short title
    pub title: String,
    /// When the activity happened
    pub timestamp: NaiveDateTime,
    /// Transfer amount; zero for non-monetary events
    pub amount: Amount,
    /// Processing status
    pub status: ActivityStatus,
    /// External reference
    pub reference: String,
}

impl ActivityRecord {
    /// Whether the record moved money
    pub fn is_transfer(&self) -> bool {
        self.amount != 0.0
    }

    /// Timestamp formatted as `Apr 8, 2024 · 6:22 PM`
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%b %-d, %Y · %-I:%M %p").to_string()
    }
}
