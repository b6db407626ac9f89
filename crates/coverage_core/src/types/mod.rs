//! Core monetary, bounds and error types.
//!
//! This module provides:
//! - `money`: `Amount` and `Percent` aliases plus non-negativity guards
//! - `bounds`: `SliderRange` and the dashboard's fixed setting ranges
//! - `error`: `CoverageError` for input validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod bounds;
pub mod error;
pub mod money;

pub use bounds::{
    SliderRange, OVERDRAFT_LIMIT_RANGE, PREFERRED_BUFFER_RANGE, SCENARIO_AMOUNT_RANGE,
};
pub use error::CoverageError;
pub use money::{Amount, Percent};
