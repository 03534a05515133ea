use chrono::NaiveDate;

use crate::budgets::budgets_model::{Budget, BudgetProgress, BudgetUpdate, NewBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(&self, budget_id: &str) -> Result<Budget>;
    fn get_budgets_by_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(&self, update: BudgetUpdate) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: String) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget(&self, budget_id: &str) -> Result<Budget>;
    fn get_budgets_by_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(&self, update: BudgetUpdate) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: String) -> Result<usize>;

    /// Spending position of every budget of the user, evaluated in the
    /// period window containing `today`.
    fn get_budget_progress(&self, user_id: &str, today: NaiveDate) -> Result<Vec<BudgetProgress>>;
}
