use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::cards::cards_model::{validate_card_fields, Card, CardUpdate, NewCard};
use crate::cards::cards_traits::{CardRepositoryTrait, CardServiceTrait};
use crate::errors::Result;

/// Service for managing cards
pub struct CardService {
    card_repository: Arc<dyn CardRepositoryTrait>,
}

impl CardService {
    pub fn new(card_repository: Arc<dyn CardRepositoryTrait>) -> Self {
        Self { card_repository }
    }
}

#[async_trait]
impl CardServiceTrait for CardService {
    fn get_card(&self, card_id: &str) -> Result<Card> {
        self.card_repository.get_card(card_id)
    }

    fn get_cards_by_user(&self, user_id: &str) -> Result<Vec<Card>> {
        self.card_repository.get_cards_by_user(user_id)
    }

    async fn create_card(&self, mut new_card: NewCard) -> Result<Card> {
        validate_card_fields(&new_card.name, new_card.last_four.as_deref())?;
        if new_card.id.is_none() {
            new_card.id = Some(Uuid::new_v4().to_string());
        }
        self.card_repository.create_card(new_card).await
    }

    async fn update_card(&self, update: CardUpdate) -> Result<Card> {
        validate_card_fields(&update.name, update.last_four.as_deref())?;
        self.card_repository.update_card(update).await
    }

    async fn delete_card(&self, card_id: String) -> Result<usize> {
        self.card_repository.delete_card(card_id).await
    }
}
