//! Card domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a payment card on file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Last four digits of the card number; never the full PAN.
    pub last_four: Option<String>,
    pub brand: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new card
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub last_four: Option<String>,
    pub brand: Option<String>,
}

/// Full-row update for an existing card
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    pub id: String,
    pub name: String,
    pub last_four: Option<String>,
    pub brand: Option<String>,
}

pub(crate) fn validate_card_fields(name: &str, last_four: Option<&str>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if let Some(digits) = last_four {
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidInput(format!(
                "lastFour must be exactly 4 digits, got '{}'",
                digits
            ))
            .into());
        }
    }
    Ok(())
}
