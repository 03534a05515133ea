//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for the per-user settings key/value store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Returns
    /// `DatabaseError::NotFound` when the key has never been written.
    fn get_setting(&self, user_id: &str, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    async fn update_setting(&self, user_id: &str, setting_key: &str, setting_value: &str)
        -> Result<()>;
}
