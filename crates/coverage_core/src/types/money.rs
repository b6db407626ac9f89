//! Monetary amounts and percentages.
//!
//! Amounts are plain `f64` dollars, matching the precision the dashboard
//! displays. Helpers here guard the non-negativity precondition shared by
//! every monetary input of the engine.

use super::error::CoverageError;

/// A currency amount in US dollars.
pub type Amount = f64;

/// A percentage in `[0, 100]`.
pub type Percent = f64;

/// Returns `value` if it is a finite, non-negative amount.
///
/// # Examples
/// ```
/// use coverage_core::types::money::ensure_non_negative;
///
/// assert_eq!(ensure_non_negative("max_sweep", 800.0).unwrap(), 800.0);
/// assert!(ensure_non_negative("max_sweep", -1.0).is_err());
/// ```
pub fn ensure_non_negative(field: &str, value: Amount) -> Result<Amount, CoverageError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CoverageError::negative(field, value))
    }
}

/// Debug-build check for the engine's monetary precondition.
#[inline]
pub(crate) fn debug_assert_non_negative(field: &str, value: Amount) {
    debug_assert!(
        value.is_finite() && value >= 0.0,
        "{} must be a non-negative amount, got {}",
        field,
        value
    );
}
