//! Budget domain models.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Calendar window a budget amount applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// Returns the string representation of this period.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "WEEKLY",
            BudgetPeriod::Monthly => "MONTHLY",
            BudgetPeriod::Yearly => "YEARLY",
        }
    }

    /// Half-open `[start, end)` calendar window containing `date`.
    /// Weeks start on Monday; months and years are calendar-aligned.
    pub fn window(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            BudgetPeriod::Weekly => {
                let start =
                    date - Duration::days(date.weekday().num_days_from_monday() as i64);
                (start, start + Duration::days(7))
            }
            BudgetPeriod::Monthly => {
                let start = date.with_day(1).unwrap_or(date);
                let end = if date.month() == 12 {
                    NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
                };
                (start, end.unwrap_or(start))
            }
            BudgetPeriod::Yearly => {
                let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
                let end = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap_or(start);
                (start, end)
            }
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing a spending budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    /// Budgeted category; `None` budgets the user's overall spending.
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub period: BudgetPeriod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new budget
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub id: Option<String>,
    pub user_id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub period: BudgetPeriod,
}

/// Full-row update for an existing budget
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub period: BudgetPeriod,
}

/// Derived spending position of one budget in its current window.
/// Never persisted; recomputed on request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub budget: Budget,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Spent share of the budgeted amount, in percent, one decimal.
    pub percent_used: Decimal,
}

pub(crate) fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "Budget amount must be positive, got {}",
            amount
        ))
        .into());
    }
    Ok(())
}
