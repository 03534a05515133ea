use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::recurring::recurring_model::MaterializationSummary;

/// Trait for the recurring materialization entry point.
///
/// `now` is passed in rather than read from the clock so a run can be
/// evaluated against any instant in tests.
#[async_trait]
pub trait RecurringTransactionServiceTrait: Send + Sync {
    async fn run_once(&self, now: DateTime<Utc>) -> Result<MaterializationSummary>;
}
