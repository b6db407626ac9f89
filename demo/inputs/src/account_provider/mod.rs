//! Account data providers.
//!
//! The account provider is the only source of the available-credit ceiling
//! used by the coverage engine. All other snapshot fields are display-only.

mod crescendo;

pub use crescendo::CrescendoFixture;

use chrono::NaiveDate;
use coverage_core::types::Amount;
use serde::{Deserialize, Serialize};

/// Trait for account data providers
pub trait AccountDataProvider: Send + Sync {
    /// Current snapshot of the credit line and checking account
    fn snapshot(&self) -> AccountSnapshot;

    /// Masked card number for display
    fn masked_card_number(&self) -> String;

    /// Available credit, used as the coverage ceiling
    fn available_credit(&self) -> Amount {
        self.snapshot().available_credit
    }
}

/// Read-only account figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Total credit line
    pub credit_line: Amount,
    /// Undrawn credit on the line
    pub available_credit: Amount,
    /// Current checking balance
    pub current_balance: Amount,
    /// Day of month autopay runs
    pub autopay_day: u32,
    /// Date of the last limit review
    pub last_review: NaiveDate,
    /// Issuing institution
    pub institution: String,
}

/// Mask all but the last four digits of a card number.
///
/// # Examples
/// ```
/// use overdraft_inputs::account_provider::mask_card_number;
///
/// assert_eq!(mask_card_number("4111222233335491"), "XXXXXXXXXXXX5491");
/// assert_eq!(mask_card_number("12"), "12");
/// ```
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    let keep = digits.len().min(4);
    let masked = digits.len() - keep;
    std::iter::repeat('X')
        .take(masked)
        .chain(digits[masked..].iter().copied())
        .collect()
}
