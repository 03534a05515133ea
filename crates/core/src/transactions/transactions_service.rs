use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

/// Service for managing transactions
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance with injected dependencies
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository.get_transaction(transaction_id)
    }

    fn get_transactions_by_user(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repository
            .get_transactions_by_user(user_id)
    }

    async fn create_transaction(&self, mut new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        if new_transaction.id.is_none() {
            new_transaction.id = Some(Uuid::new_v4().to_string());
        }

        debug!(
            "Creating {} transaction '{}' for user {}",
            new_transaction.transaction_type, new_transaction.title, new_transaction.user_id
        );
        self.transaction_repository
            .create_transaction(new_transaction)
            .await
    }

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction> {
        update.validate()?;
        self.transaction_repository.update_transaction(update).await
    }

    async fn delete_transaction(&self, transaction_id: String) -> Result<usize> {
        self.transaction_repository
            .delete_transaction(transaction_id)
            .await
    }
}
