//! Idempotency key computation for materialized occurrences.
//!
//! A template must spawn at most one occurrence per calendar day, even when
//! the daily trigger fires more than once. The key is a stable fingerprint
//! of the (template, occurrence date) pair; the storage layer enforces a
//! uniqueness constraint on it.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Computes the stable idempotency key for one occurrence of a template.
///
/// The same template and date always produce the same key, so a repeated
/// trigger within one day collides instead of spawning a duplicate.
pub fn compute_occurrence_key(template_id: &str, occurrence_date: NaiveDate) -> String {
    let mut hasher = Sha256::new();

    hasher.update(template_id.as_bytes());
    hasher.update(b"|");
    hasher.update(occurrence_date.format("%Y-%m-%d").to_string().as_bytes());

    hex::encode(hasher.finalize())
}
