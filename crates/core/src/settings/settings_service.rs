use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::settings::settings_model::{Settings, SettingsUpdate};
use crate::settings::settings_traits::SettingsRepositoryTrait;

const BASE_CURRENCY_KEY: &str = "base_currency";
const LOCALE_KEY: &str = "locale";

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self, user_id: &str) -> Result<Settings>;

    async fn update_settings(&self, user_id: &str, new_settings: &SettingsUpdate) -> Result<()>;

    /// Base currency for the user, falling back to the application default
    /// when the user never chose one.
    fn get_base_currency(&self, user_id: &str) -> Result<String>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn get_optional(&self, user_id: &str, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(user_id, key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self, user_id: &str) -> Result<Settings> {
        Ok(Settings {
            user_id: user_id.to_string(),
            base_currency: self.get_base_currency(user_id)?,
            locale: self.get_optional(user_id, LOCALE_KEY)?,
        })
    }

    async fn update_settings(&self, user_id: &str, new_settings: &SettingsUpdate) -> Result<()> {
        if let Some(ref base_currency) = new_settings.base_currency {
            if base_currency.len() != 3
                || !base_currency.chars().all(|c| c.is_ascii_uppercase())
            {
                return Err(ValidationError::InvalidInput(format!(
                    "Base currency must be a 3-letter uppercase code, got '{}'",
                    base_currency
                ))
                .into());
            }
            self.settings_repository
                .update_setting(user_id, BASE_CURRENCY_KEY, base_currency)
                .await?;
        }

        if let Some(ref locale) = new_settings.locale {
            self.settings_repository
                .update_setting(user_id, LOCALE_KEY, locale)
                .await?;
        }

        Ok(())
    }

    fn get_base_currency(&self, user_id: &str) -> Result<String> {
        Ok(self
            .get_optional(user_id, BASE_CURRENCY_KEY)?
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string()))
    }
}
