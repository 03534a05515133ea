//! Settings domain models.

use serde::{Deserialize, Serialize};

/// Per-user application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub user_id: String,
    pub base_currency: String,
    pub locale: Option<String>,
}

/// Partial update for user settings; absent fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub base_currency: Option<String>,
    pub locale: Option<String>,
}
