//! # Overdraft Dashboard
//!
//! Terminal dashboard for overdraft protection settings.
//!
//! Uses ratatui for rendering and crossterm for terminal handling. Every
//! key press is routed through the `coverage_core` reducer, so the figures
//! on screen always come from the same engine the CLI uses.
//!
//! ### Screens
//! - **Coverage**: controls, transfer priority and the scenario planner
//! - **Alerts & Activity**: alert channels, recent activity and checklist

pub mod app;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{action_for_key, Dashboard, Screen, TuiApp};
}
