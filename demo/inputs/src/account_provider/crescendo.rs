//! Crescendo Bank fixture account.

use chrono::NaiveDate;
use coverage_core::types::Amount;

use super::{mask_card_number, AccountDataProvider, AccountSnapshot};

/// Fixed Crescendo Bank reserve account.
#[derive(Debug, Clone)]
pub struct CrescendoFixture {
    snapshot: AccountSnapshot,
    card_number: String,
}

impl CrescendoFixture {
    /// Create the fixture with the standard snapshot
    pub fn new() -> Self {
        Self {
            snapshot: AccountSnapshot {
                credit_line: 15000.0,
                available_credit: 8700.0,
                current_balance: 6300.0,
                autopay_day: 17,
                last_review: NaiveDate::from_ymd_opt(2024, 4, 9).unwrap_or_default(),
                institution: "Crescendo Bank".to_string(),
            },
            card_number: "3056 930902 5491".to_string(),
        }
    }

    /// Same fixture with a different available credit.
    pub fn with_available_credit(mut self, available_credit: Amount) -> Self {
        if available_credit < 0.0 {
            tracing::warn!(available_credit, "negative available credit clamped to zero");
        }
        self.snapshot.available_credit = available_credit.max(0.0);
        self
    }
}

impl Default for CrescendoFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountDataProvider for CrescendoFixture {
    fn snapshot(&self) -> AccountSnapshot {
        self.snapshot.clone()
    }

    fn masked_card_number(&self) -> String {
        mask_card_number(&self.card_number)
    }
}
