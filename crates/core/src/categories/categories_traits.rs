use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_category(&self, category_id: &str) -> Result<Category>;
    fn get_categories_by_user(&self, user_id: &str) -> Result<Vec<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, update: CategoryUpdate) -> Result<Category>;
    async fn delete_category(&self, category_id: String) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_category(&self, category_id: &str) -> Result<Category>;
    fn get_categories_by_user(&self, user_id: &str) -> Result<Vec<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, update: CategoryUpdate) -> Result<Category>;
    async fn delete_category(&self, category_id: String) -> Result<usize>;
}
