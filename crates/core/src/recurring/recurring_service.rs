use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::{debug, error, info};

use crate::errors::{DatabaseError, Error, Result};
use crate::recurring::idempotency::compute_occurrence_key;
use crate::recurring::recurring_model::MaterializationSummary;
use crate::recurring::recurring_traits::RecurringTransactionServiceTrait;
use crate::transactions::{
    Frequency, NewTransaction, Transaction, TransactionRepositoryTrait,
};
use crate::utils::time_utils::local_date_from_utc;

/// Suffix appended to the template title on every spawned occurrence.
const OCCURRENCE_TITLE_SUFFIX: &str = " (Recurring)";

/// Determines whether a template is due to spawn an occurrence on `today`.
///
/// - `Daily` templates are due every day, including the template's own date.
/// - `Weekly` templates are due on the template date's weekday.
/// - `Monthly` templates are due on the template date's day-of-month; a
///   day-31 template is simply not due in shorter months.
/// - `Yearly` templates are due when month and day both match, so a Feb-29
///   template only spawns in leap years.
pub fn due_on(frequency: Frequency, template_date: NaiveDate, today: NaiveDate) -> bool {
    match frequency {
        Frequency::Daily => true,
        Frequency::Weekly => today.weekday() == template_date.weekday(),
        Frequency::Monthly => today.day() == template_date.day(),
        Frequency::Yearly => {
            today.month() == template_date.month() && today.day() == template_date.day()
        }
    }
}

/// Service that materializes due recurring templates into concrete
/// transactions.
///
/// Templates are read-only to this service: it only ever inserts new,
/// non-recurring rows through the shared transaction repository. Each
/// template is an independent unit of work, so one failed spawn never
/// aborts the rest of the batch.
pub struct RecurringTransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl RecurringTransactionService {
    /// Creates a new RecurringTransactionService instance with injected
    /// dependencies
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }

    /// Builds the occurrence row spawned from `template` on `today`.
    ///
    /// The occurrence is a historical fact, not a further template: it is
    /// always non-recurring and carries no frequency.
    fn build_occurrence(template: &Transaction, today: NaiveDate) -> NewTransaction {
        NewTransaction {
            id: None,
            user_id: template.user_id.clone(),
            category_id: template.category_id.clone(),
            title: format!("{}{}", template.title, OCCURRENCE_TITLE_SUFFIX),
            amount: template.amount,
            currency: template.currency.clone(),
            transaction_type: template.transaction_type,
            date: today,
            is_recurring: false,
            frequency: None,
            idempotency_key: Some(compute_occurrence_key(&template.id, today)),
        }
    }
}

#[async_trait]
impl RecurringTransactionServiceTrait for RecurringTransactionService {
    async fn run_once(&self, now: DateTime<Utc>) -> Result<MaterializationSummary> {
        let today = local_date_from_utc(now);
        let templates = self.transaction_repository.get_recurring_transactions()?;

        let mut summary = MaterializationSummary {
            templates_scanned: templates.len(),
            ..Default::default()
        };

        for template in &templates {
            let Some(frequency) = template.frequency else {
                debug!("Template {} has no frequency, never due", template.id);
                continue;
            };

            if !due_on(frequency, template.date, today) {
                continue;
            }

            let key = compute_occurrence_key(&template.id, today);
            match self.transaction_repository.find_by_idempotency_key(&key) {
                Ok(Some(_)) => {
                    debug!(
                        "Template {} already materialized on {}, skipping",
                        template.id, today
                    );
                    summary.duplicates_skipped += 1;
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    error!(
                        "Failed to check existing occurrence for template {}: {}",
                        template.id, e
                    );
                    summary.failed += 1;
                    continue;
                }
            }

            let occurrence = Self::build_occurrence(template, today);
            match self
                .transaction_repository
                .create_transaction(occurrence)
                .await
            {
                Ok(created) => {
                    debug!(
                        "Materialized template {} as transaction {} on {}",
                        template.id, created.id, today
                    );
                    summary.spawned += 1;
                }
                // A concurrent trigger got there first; the uniqueness
                // constraint turned the race into a skip.
                Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                    summary.duplicates_skipped += 1;
                }
                Err(e) => {
                    error!("Failed to materialize template {}: {}", template.id, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Recurring run for {}: {} templates scanned, {} spawned, {} duplicates skipped, {} failed",
            today,
            summary.templates_scanned,
            summary.spawned,
            summary.duplicates_skipped,
            summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_always_due() {
        let template_date = date(2025, 6, 15);
        assert!(due_on(Frequency::Daily, template_date, template_date));
        assert!(due_on(Frequency::Daily, template_date, date(2025, 6, 16)));
        assert!(due_on(Frequency::Daily, template_date, date(2026, 1, 1)));
    }

    #[test]
    fn test_weekly_due_only_on_matching_weekday() {
        // 2025-06-16 is a Monday
        let template_date = date(2025, 6, 16);
        assert_eq!(template_date.weekday(), Weekday::Mon);

        assert!(due_on(Frequency::Weekly, template_date, template_date));
        assert!(due_on(Frequency::Weekly, template_date, date(2025, 6, 23)));

        // The other six days of that week are not due
        for offset in 1..7 {
            let other = date(2025, 6, 16 + offset);
            assert!(
                !due_on(Frequency::Weekly, template_date, other),
                "should not be due on {}",
                other
            );
        }
    }

    #[test]
    fn test_monthly_due_on_matching_day_of_month() {
        let template_date = date(2025, 1, 15);
        assert!(due_on(Frequency::Monthly, template_date, date(2025, 2, 15)));
        assert!(due_on(Frequency::Monthly, template_date, date(2025, 3, 15)));
        assert!(!due_on(Frequency::Monthly, template_date, date(2025, 2, 14)));
        assert!(!due_on(Frequency::Monthly, template_date, date(2025, 2, 16)));
    }

    #[test]
    fn test_monthly_day_31_skips_short_months() {
        let template_date = date(2025, 1, 31);
        // February through June 2025: only March and May have a 31st
        assert!(!due_on(Frequency::Monthly, template_date, date(2025, 2, 28)));
        assert!(due_on(Frequency::Monthly, template_date, date(2025, 3, 31)));
        assert!(!due_on(Frequency::Monthly, template_date, date(2025, 4, 30)));
        assert!(due_on(Frequency::Monthly, template_date, date(2025, 5, 31)));
        assert!(!due_on(Frequency::Monthly, template_date, date(2025, 6, 30)));
    }

    #[test]
    fn test_yearly_due_on_matching_month_and_day() {
        let template_date = date(2024, 7, 4);
        assert!(due_on(Frequency::Yearly, template_date, date(2025, 7, 4)));
        assert!(!due_on(Frequency::Yearly, template_date, date(2025, 7, 5)));
        assert!(!due_on(Frequency::Yearly, template_date, date(2025, 8, 4)));
    }

    #[test]
    fn test_yearly_leap_day_only_in_leap_years() {
        let template_date = date(2024, 2, 29);
        assert!(due_on(Frequency::Yearly, template_date, date(2028, 2, 29)));
        // 2025 has no Feb 29, so neither Feb 28 nor Mar 1 match
        assert!(!due_on(Frequency::Yearly, template_date, date(2025, 2, 28)));
        assert!(!due_on(Frequency::Yearly, template_date, date(2025, 3, 1)));
    }
}
