//! Rule-based insight generation over a user's transaction history.
//!
//! The engine is a pure function: same input list, same output list, no
//! hidden state and no I/O, so it is safe to invoke from any number of
//! concurrent requests.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::insights::insights_model::{Insight, InsightType};
use crate::transactions::{Transaction, TransactionRepositoryTrait};

/// Savings rate (percent) above which the savings insight turns positive.
const SAVINGS_RATE_TARGET: Decimal = dec!(20);

/// Share of total spending (percent) a single category must strictly exceed
/// to count as concentrated.
const CONCENTRATION_THRESHOLD: Decimal = dec!(40);

/// Minimum number of expense rows before the frequency rule speaks up.
const FREQUENCY_MIN_EXPENSES: usize = 10;

/// Fixed denominator for the per-day approximation. Deliberately not an
/// elapsed-day count; see the frequency rule tests.
const FREQUENCY_WINDOW_DAYS: Decimal = dec!(30);

/// Derives the ordered list of insights for one user's transaction history.
///
/// Rules are evaluated in a fixed order (savings rate, category
/// concentration, logging frequency) and each appends independently. The
/// result is never empty: when no rule has anything to say (including the
/// empty-history case), a single welcome insight is returned instead.
///
/// Rows violating the non-negative-amount invariant are skipped with a
/// warning rather than poisoning the whole computation. Amounts are summed
/// across currencies without conversion.
pub fn generate_insights(transactions: &[Transaction]) -> Vec<Insight> {
    let mut insights = Vec::new();

    let valid: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| {
            if t.amount.is_sign_negative() {
                warn!(
                    "Transaction {} has negative amount {}, excluded from insights",
                    t.id, t.amount
                );
                false
            } else {
                true
            }
        })
        .collect();

    let total_income: Decimal = valid
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expense_rows: Vec<&Transaction> =
        valid.iter().copied().filter(|t| t.is_expense()).collect();
    let total_expenses: Decimal = expense_rows.iter().map(|t| t.amount).sum();

    // Rule 1: savings rate, only meaningful with income on record
    if total_income > Decimal::ZERO {
        let savings_rate =
            (total_income - total_expenses) / total_income * Decimal::ONE_HUNDRED;

        if savings_rate > SAVINGS_RATE_TARGET {
            insights.push(Insight::new(
                InsightType::Success,
                "Great Savings!",
                format!(
                    "You're saving {:.1}% of your income. Keep it up!",
                    savings_rate.round_dp(1)
                ),
            ));
        } else if savings_rate > Decimal::ZERO {
            insights.push(Insight::new(
                InsightType::Warning,
                "Room for Improvement",
                format!(
                    "You're saving {:.1}% of your income. Try to reach at least 20%.",
                    savings_rate.round_dp(1)
                ),
            ));
        } else {
            insights.push(Insight::new(
                InsightType::Error,
                "Overspending Warning",
                "You're spending more than you earn. Review your expenses.",
            ));
        }
    }

    // Rule 2: category concentration over categorized expenses
    if total_expenses > Decimal::ZERO {
        let mut by_category: HashMap<&str, Decimal> = HashMap::new();
        for t in &expense_rows {
            if let Some(category_id) = t.category_id.as_deref() {
                *by_category.entry(category_id).or_insert(Decimal::ZERO) += t.amount;
            }
        }

        // Highest sum wins; ties break toward the lowest category id so the
        // pick is deterministic regardless of map iteration order.
        let top = by_category
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)));

        if let Some((_, top_sum)) = top {
            let percentage = *top_sum / total_expenses * Decimal::ONE_HUNDRED;
            if percentage > CONCENTRATION_THRESHOLD {
                insights.push(Insight::new(
                    InsightType::Info,
                    "Focused Spending",
                    format!(
                        "{:.0}% of your spending goes to a single category.",
                        percentage.round_dp(0)
                    ),
                ));
            }
        }
    }

    // Rule 3: logging frequency
    if expense_rows.len() > FREQUENCY_MIN_EXPENSES {
        let per_day = Decimal::from(expense_rows.len() as u64) / FREQUENCY_WINDOW_DAYS;
        insights.push(Insight::new(
            InsightType::Info,
            "Transaction Frequency",
            format!(
                "You log about {:.1} expense transactions per day.",
                per_day.round_dp(1)
            ),
        ));
    }

    if insights.is_empty() {
        insights.push(Insight::new(
            InsightType::Info,
            "Welcome to Insights",
            "Start logging your income and expenses to see personalized insights here.",
        ));
    }

    insights
}

/// Trait for insight service operations
pub trait InsightsServiceTrait: Send + Sync {
    fn get_insights(&self, user_id: &str) -> Result<Vec<Insight>>;
}

/// Service wiring the insight engine to the transaction store.
pub struct InsightsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl InsightsService {
    /// Creates a new InsightsService instance with injected dependencies
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

impl InsightsServiceTrait for InsightsService {
    fn get_insights(&self, user_id: &str) -> Result<Vec<Insight>> {
        let transactions = self
            .transaction_repository
            .get_transactions_by_user(user_id)?;
        Ok(generate_insights(&transactions))
    }
}
