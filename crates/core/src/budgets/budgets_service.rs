use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::budgets::budgets_model::{
    validate_amount, Budget, BudgetProgress, BudgetUpdate, NewBudget,
};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionRepositoryTrait};

/// Service for managing budgets and deriving their spending position.
pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BudgetService {
    /// Creates a new BudgetService instance with injected dependencies
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            budget_repository,
            transaction_repository,
        }
    }

    /// Sums the expense rows that fall inside the budget's window, filtered
    /// to its category when one is set. Amounts are summed across currencies
    /// without conversion, matching the insight engine's simplification.
    fn spent_in_window(budget: &Budget, transactions: &[Transaction], today: NaiveDate) -> Decimal {
        let (start, end) = budget.period.window(today);
        transactions
            .iter()
            .filter(|t| t.is_expense())
            .filter(|t| t.date >= start && t.date < end)
            .filter(|t| match &budget.category_id {
                Some(category_id) => t.category_id.as_deref() == Some(category_id.as_str()),
                None => true,
            })
            .map(|t| t.amount)
            .sum()
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budget(&self, budget_id: &str) -> Result<Budget> {
        self.budget_repository.get_budget(budget_id)
    }

    fn get_budgets_by_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.budget_repository.get_budgets_by_user(user_id)
    }

    async fn create_budget(&self, mut new_budget: NewBudget) -> Result<Budget> {
        validate_amount(new_budget.amount)?;
        if new_budget.id.is_none() {
            new_budget.id = Some(Uuid::new_v4().to_string());
        }
        self.budget_repository.create_budget(new_budget).await
    }

    async fn update_budget(&self, update: BudgetUpdate) -> Result<Budget> {
        validate_amount(update.amount)?;
        self.budget_repository.update_budget(update).await
    }

    async fn delete_budget(&self, budget_id: String) -> Result<usize> {
        self.budget_repository.delete_budget(budget_id).await
    }

    fn get_budget_progress(&self, user_id: &str, today: NaiveDate) -> Result<Vec<BudgetProgress>> {
        let budgets = self.budget_repository.get_budgets_by_user(user_id)?;
        if budgets.is_empty() {
            return Ok(Vec::new());
        }

        let transactions = self
            .transaction_repository
            .get_transactions_by_user(user_id)?;

        Ok(budgets
            .into_iter()
            .map(|budget| {
                let spent = Self::spent_in_window(&budget, &transactions, today);
                let remaining = budget.amount - spent;
                let percent_used = if budget.amount > Decimal::ZERO {
                    (spent / budget.amount * Decimal::ONE_HUNDRED).round_dp(1)
                } else {
                    Decimal::ZERO
                };
                BudgetProgress {
                    budget,
                    spent,
                    remaining,
                    percent_used,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::budgets_model::BudgetPeriod;
    use crate::errors::{DatabaseError, Error};
    use crate::transactions::{
        NewTransaction, Transaction, TransactionType, TransactionUpdate,
    };
    use chrono::Utc;
    use rust_decimal_macros::dec;

    struct MockBudgetRepository {
        rows: Vec<Budget>,
    }

    #[async_trait]
    impl BudgetRepositoryTrait for MockBudgetRepository {
        fn get_budget(&self, budget_id: &str) -> Result<Budget> {
            self.rows
                .iter()
                .find(|b| b.id == budget_id)
                .cloned()
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(budget_id.to_string())))
        }

        fn get_budgets_by_user(&self, user_id: &str) -> Result<Vec<Budget>> {
            Ok(self
                .rows
                .iter()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
            let now = Utc::now();
            Ok(Budget {
                id: new_budget.id.unwrap_or_default(),
                user_id: new_budget.user_id,
                category_id: new_budget.category_id,
                amount: new_budget.amount,
                currency: new_budget.currency,
                period: new_budget.period,
                created_at: now,
                updated_at: now,
            })
        }

        async fn update_budget(&self, _: BudgetUpdate) -> Result<Budget> {
            unimplemented!()
        }

        async fn delete_budget(&self, _: String) -> Result<usize> {
            unimplemented!()
        }
    }

    struct MockTransactionRepository {
        rows: Vec<Transaction>,
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn get_transaction(&self, _: &str) -> Result<Transaction> {
            unimplemented!()
        }

        fn get_transactions_by_user(&self, user_id: &str) -> Result<Vec<Transaction>> {
            Ok(self
                .rows
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_recurring_transactions(&self) -> Result<Vec<Transaction>> {
            unimplemented!()
        }

        fn find_by_idempotency_key(&self, _: &str) -> Result<Option<Transaction>> {
            unimplemented!()
        }

        async fn create_transaction(&self, _: NewTransaction) -> Result<Transaction> {
            unimplemented!()
        }

        async fn update_transaction(&self, _: TransactionUpdate) -> Result<Transaction> {
            unimplemented!()
        }

        async fn delete_transaction(&self, _: String) -> Result<usize> {
            unimplemented!()
        }
    }

    fn budget(id: &str, category_id: Option<&str>, amount: Decimal) -> Budget {
        let now = Utc::now();
        Budget {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            category_id: category_id.map(|c| c.to_string()),
            amount,
            currency: "USD".to_string(),
            period: BudgetPeriod::Monthly,
            created_at: now,
            updated_at: now,
        }
    }

    fn expense(date: NaiveDate, amount: Decimal, category_id: Option<&str>) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: "user-1".to_string(),
            category_id: category_id.map(|c| c.to_string()),
            title: "Spending".to_string(),
            amount,
            currency: "USD".to_string(),
            transaction_type: TransactionType::Expense,
            date,
            is_recurring: false,
            frequency: None,
            idempotency_key: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_service(budgets: Vec<Budget>, transactions: Vec<Transaction>) -> BudgetService {
        BudgetService::new(
            Arc::new(MockBudgetRepository { rows: budgets }),
            Arc::new(MockTransactionRepository { rows: transactions }),
        )
    }

    #[tokio::test]
    async fn test_create_budget_rejects_non_positive_amount() {
        let service = make_service(Vec::new(), Vec::new());

        let input = NewBudget {
            id: None,
            user_id: "user-1".to_string(),
            category_id: None,
            amount: dec!(0),
            currency: "USD".to_string(),
            period: BudgetPeriod::Monthly,
        };
        assert!(service.create_budget(input).await.is_err());
    }

    #[test]
    fn test_progress_counts_only_in_window_expenses() {
        let today = date(2025, 6, 18);
        let service = make_service(
            vec![budget("b1", Some("cat-food"), dec!(500))],
            vec![
                // In window, in category
                expense(date(2025, 6, 3), dec!(120), Some("cat-food")),
                expense(date(2025, 6, 17), dec!(80), Some("cat-food")),
                // In window, wrong category
                expense(date(2025, 6, 10), dec!(999), Some("cat-travel")),
                // Out of window, right category
                expense(date(2025, 5, 28), dec!(50), Some("cat-food")),
                expense(date(2025, 7, 1), dec!(70), Some("cat-food")),
            ],
        );

        let progress = service.get_budget_progress("user-1", today).unwrap();

        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].spent, dec!(200));
        assert_eq!(progress[0].remaining, dec!(300));
        assert_eq!(progress[0].percent_used, dec!(40.0));
    }

    #[test]
    fn test_overall_budget_counts_every_category() {
        let today = date(2025, 6, 18);
        let service = make_service(
            vec![budget("b1", None, dec!(1000))],
            vec![
                expense(date(2025, 6, 3), dec!(300), Some("cat-food")),
                expense(date(2025, 6, 10), dec!(200), Some("cat-travel")),
                expense(date(2025, 6, 12), dec!(100), None),
            ],
        );

        let progress = service.get_budget_progress("user-1", today).unwrap();

        assert_eq!(progress[0].spent, dec!(600));
        assert_eq!(progress[0].percent_used, dec!(60.0));
    }

    #[test]
    fn test_overspent_budget_goes_negative() {
        let today = date(2025, 6, 18);
        let service = make_service(
            vec![budget("b1", Some("cat-food"), dec!(100))],
            vec![expense(date(2025, 6, 3), dec!(150), Some("cat-food"))],
        );

        let progress = service.get_budget_progress("user-1", today).unwrap();

        assert_eq!(progress[0].remaining, dec!(-50));
        assert_eq!(progress[0].percent_used, dec!(150.0));
    }

    #[test]
    fn test_no_budgets_yields_empty_progress() {
        let service = make_service(Vec::new(), Vec::new());
        assert!(service
            .get_budget_progress("user-1", date(2025, 6, 18))
            .unwrap()
            .is_empty());
    }
}
