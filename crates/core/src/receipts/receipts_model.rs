//! Receipt-scan domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::{NewTransaction, TransactionType};

/// Fields recovered from one OCR-recognized receipt.
///
/// Every field is optional: recognition quality varies and the client lets
/// the user fill in whatever the heuristics missed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptScan {
    pub merchant: Option<String>,
    pub total: Option<Decimal>,
    pub date: Option<NaiveDate>,
}

impl ReceiptScan {
    /// Converts the scan into an expense draft for the standard write path.
    ///
    /// `today` stands in when no date was recognized; `currency` comes from
    /// the user's settings since receipts rarely carry a usable code.
    pub fn to_draft(&self, user_id: &str, currency: &str, today: NaiveDate) -> NewTransaction {
        NewTransaction {
            id: None,
            user_id: user_id.to_string(),
            category_id: None,
            title: self
                .merchant
                .clone()
                .unwrap_or_else(|| "Scanned receipt".to_string()),
            amount: self.total.unwrap_or_default(),
            currency: currency.to_string(),
            transaction_type: TransactionType::Expense,
            date: self.date.unwrap_or(today),
            is_recurring: false,
            frequency: None,
            idempotency_key: None,
        }
    }
}
