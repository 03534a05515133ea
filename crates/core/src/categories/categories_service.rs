use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::categories::categories_model::{
    validate_name, Category, CategoryUpdate, NewCategory,
};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::Result;

/// Service for managing categories
pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(category_repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_category(&self, category_id: &str) -> Result<Category> {
        self.category_repository.get_category(category_id)
    }

    fn get_categories_by_user(&self, user_id: &str) -> Result<Vec<Category>> {
        self.category_repository.get_categories_by_user(user_id)
    }

    async fn create_category(&self, mut new_category: NewCategory) -> Result<Category> {
        validate_name(&new_category.name)?;
        if new_category.id.is_none() {
            new_category.id = Some(Uuid::new_v4().to_string());
        }
        self.category_repository.create_category(new_category).await
    }

    async fn update_category(&self, update: CategoryUpdate) -> Result<Category> {
        validate_name(&update.name)?;
        self.category_repository.update_category(update).await
    }

    async fn delete_category(&self, category_id: String) -> Result<usize> {
        self.category_repository.delete_category(category_id).await
    }
}
