//! # Upstream Systems
//!
//! Fixture collaborators that feed the overdraft protection dashboard.
//!
//! These stand in for the account-data and activity-feed services a real
//! deployment would call. All data is fixed and in-memory.
//!
//! ## Modules
//!
//! - [`account_provider`]: Credit line and checking snapshot (supplies the coverage ceiling)
//! - [`activity_feed`]: Recent coverage activity for display

pub mod account_provider;
pub mod activity_feed;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::account_provider::{AccountDataProvider, AccountSnapshot, CrescendoFixture};
    pub use crate::activity_feed::{
        ActivityFeed, ActivityRecord, ActivityStatus, FixtureActivityFeed,
    };
}
