//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Direction of a transaction.
///
/// The stored amount is always non-negative; the sign is implied by this
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Returns the string representation of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often a recurring template spawns a new occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the string representation of this frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing a transaction in the system.
///
/// A row with `is_recurring = true` acts as a template: the recurring
/// scheduler reads it and spawns dated occurrences from it. Occurrences are
/// always stored with `is_recurring = false`, so a spawned row can never act
/// as a further template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Identity-provider subject; every query and mutation is scoped to it.
    pub user_id: String,
    pub category_id: Option<String>,
    pub title: String,
    pub amount: Decimal,
    /// ISO-4217-like 3-letter code.
    pub currency: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Calendar date the transaction is logically dated; no time component.
    pub date: NaiveDate,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    /// Stable fingerprint set on occurrences spawned from a template.
    /// The storage layer enforces uniqueness on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Check if this row is a recurring template.
    pub fn is_template(&self) -> bool {
        self.is_recurring
    }
}

/// Input model for creating a new transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub user_id: String,
    pub category_id: Option<String>,
    pub title: String,
    pub amount: Decimal,
    pub currency: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    pub frequency: Option<Frequency>,
    /// Set internally when materializing recurring occurrences; never
    /// supplied by API callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl NewTransaction {
    /// Validates the input against the domain invariants.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.title,
            self.amount,
            &self.currency,
            self.is_recurring,
            self.frequency,
        )
    }
}

/// Full-row update for an existing transaction.
///
/// Audit timestamps are storage-assigned; the idempotency fingerprint of a
/// materialized occurrence is immutable and not part of the update surface.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub category_id: Option<String>,
    pub title: String,
    pub amount: Decimal,
    pub currency: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    pub frequency: Option<Frequency>,
}

impl TransactionUpdate {
    /// Validates the update against the domain invariants.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.title,
            self.amount,
            &self.currency,
            self.is_recurring,
            self.frequency,
        )
    }
}

fn validate_fields(
    title: &str,
    amount: Decimal,
    currency: &str,
    is_recurring: bool,
    frequency: Option<Frequency>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()).into());
    }
    if amount.is_sign_negative() {
        return Err(ValidationError::InvalidInput(format!(
            "Amount must be non-negative, got {}",
            amount
        ))
        .into());
    }
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidInput(format!(
            "Currency must be a 3-letter uppercase code, got '{}'",
            currency
        ))
        .into());
    }
    if is_recurring && frequency.is_none() {
        return Err(ValidationError::MissingField("frequency".to_string()).into());
    }
    if !is_recurring && frequency.is_some() {
        return Err(ValidationError::InvalidInput(
            "Frequency is only meaningful on recurring templates".to_string(),
        )
        .into());
    }
    Ok(())
}
