use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use async_trait::async_trait;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    fn get_transactions_by_user(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// All recurring templates across every user, for the scheduler's
    /// global batch scan.
    fn get_recurring_transactions(&self) -> Result<Vec<Transaction>>;

    /// Looks up a materialized occurrence by its idempotency fingerprint.
    fn find_by_idempotency_key(&self, key: &str) -> Result<Option<Transaction>>;

    /// Inserts one row, returning the stored record. Implementations must
    /// reject a duplicate `idempotency_key` with
    /// `DatabaseError::UniqueViolation`.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction>;

    async fn delete_transaction(&self, transaction_id: String) -> Result<usize>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    fn get_transactions_by_user(&self, user_id: &str) -> Result<Vec<Transaction>>;

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction>;

    async fn delete_transaction(&self, transaction_id: String) -> Result<usize>;
}
