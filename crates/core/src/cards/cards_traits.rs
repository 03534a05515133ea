use crate::cards::cards_model::{Card, CardUpdate, NewCard};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for card repository operations
#[async_trait]
pub trait CardRepositoryTrait: Send + Sync {
    fn get_card(&self, card_id: &str) -> Result<Card>;
    fn get_cards_by_user(&self, user_id: &str) -> Result<Vec<Card>>;
    async fn create_card(&self, new_card: NewCard) -> Result<Card>;
    async fn update_card(&self, update: CardUpdate) -> Result<Card>;
    async fn delete_card(&self, card_id: String) -> Result<usize>;
}

/// Trait for card service operations
#[async_trait]
pub trait CardServiceTrait: Send + Sync {
    fn get_card(&self, card_id: &str) -> Result<Card>;
    fn get_cards_by_user(&self, user_id: &str) -> Result<Vec<Card>>;
    async fn create_card(&self, new_card: NewCard) -> Result<Card>;
    async fn update_card(&self, update: CardUpdate) -> Result<Card>;
    async fn delete_card(&self, card_id: String) -> Result<usize>;
}
