//! Bounded slider ranges for user-adjustable settings.
//!
//! Every adjustable amount on the dashboard moves on a fixed grid
//! `min, min + step, ..., max`. The ranges are enforced here rather than
//! left to the input widget, so every state the reducer produces is valid.
//!
//! # Examples
//!
//! ```
//! use coverage_core::types::bounds::OVERDRAFT_LIMIT_RANGE;
//!
//! assert!(OVERDRAFT_LIMIT_RANGE.contains(1200.0));
//! assert_eq!(OVERDRAFT_LIMIT_RANGE.clamp(5000.0), 3000.0);
//! assert_eq!(OVERDRAFT_LIMIT_RANGE.clamp(1224.0), 1200.0);
//! ```

use super::error::CoverageError;
use super::money::Amount;

/// Inclusive range with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderRange {
    /// Lower bound (inclusive)
    pub min: Amount,
    /// Upper bound (inclusive)
    pub max: Amount,
    /// Grid step, measured from `min`
    pub step: Amount,
}

/// Nightly sweep cap: $300 to $3,000 in $50 steps.
pub const OVERDRAFT_LIMIT_RANGE: SliderRange = SliderRange::new(300.0, 3000.0, 50.0);

/// Checking cushion before a sweep triggers: $50 to $1,000 in $25 steps.
pub const PREFERRED_BUFFER_RANGE: SliderRange = SliderRange::new(50.0, 1000.0, 25.0);

/// Projected overdraft for the scenario planner: $100 to $2,500 in $50 steps.
pub const SCENARIO_AMOUNT_RANGE: SliderRange = SliderRange::new(100.0, 2500.0, 50.0);

impl SliderRange {
    /// Create a range. `min <= max` and `step > 0` are required.
    pub const fn new(min: Amount, max: Amount, step: Amount) -> Self {
        Self { min, max, step }
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: Amount) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into `[min, max]` and snap to the nearest grid point.
    ///
    /// Non-finite input maps to `min`.
    pub fn clamp(&self, value: Amount) -> Amount {
        if !value.is_finite() {
            return self.min;
        }
        let bounded = value.clamp(self.min, self.max);
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Move `value` by `steps` grid points, staying within the range.
    pub fn nudge(&self, value: Amount, steps: i32) -> Amount {
        self.clamp(value + f64::from(steps) * self.step)
    }

    /// Reject values outside the range.
    pub fn validate(&self, field: &str, value: Amount) -> Result<Amount, CoverageError> {
        if value.is_finite() && self.contains(value) {
            Ok(value)
        } else {
            Err(CoverageError::out_of_range(field, value, self.min, self.max))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        assert!(OVERDRAFT_LIMIT_RANGE.contains(300.0));
        assert!(OVERDRAFT_LIMIT_RANGE.contains(3000.0));
        assert!(!OVERDRAFT_LIMIT_RANGE.contains(299.99));
    }

    #[test]
    fn test_clamp_snaps_to_step() {
        assert_eq!(PREFERRED_BUFFER_RANGE.clamp(262.0), 250.0);
        assert_eq!(PREFERRED_BUFFER_RANGE.clamp(263.0), 275.0);
        assert_eq!(SCENARIO_AMOUNT_RANGE.clamp(540.0), 550.0);
        assert_eq!(SCENARIO_AMOUNT_RANGE.clamp(10.0), 100.0);
    }

    #[test]
    fn test_clamp_non_finite() {
        assert_eq!(SCENARIO_AMOUNT_RANGE.clamp(f64::NAN), 100.0);
        assert_eq!(SCENARIO_AMOUNT_RANGE.clamp(f64::INFINITY), 100.0);
    }

    #[test]
    fn test_nudge_stays_in_range() {
        assert_eq!(OVERDRAFT_LIMIT_RANGE.nudge(1200.0, 1), 1250.0);
        assert_eq!(OVERDRAFT_LIMIT_RANGE.nudge(1200.0, -2), 1100.0);
        assert_eq!(OVERDRAFT_LIMIT_RANGE.nudge(3000.0, 5), 3000.0);
        assert_eq!(OVERDRAFT_LIMIT_RANGE.nudge(300.0, -1), 300.0);
    }

    #[test]
    fn test_validate() {
        assert_eq!(OVERDRAFT_LIMIT_RANGE.validate("limit", 1200.0), Ok(1200.0));
        let err = OVERDRAFT_LIMIT_RANGE.validate("limit", 100.0).unwrap_err();
        assert_eq!(err, CoverageError::out_of_range("limit", 100.0, 300.0, 3000.0));
    }
}
