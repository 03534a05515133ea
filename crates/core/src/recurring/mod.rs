//! Recurring transactions module - due-ness rules, materialization, and the
//! daily scheduler.

mod idempotency;
mod recurring_model;
mod recurring_scheduler;
mod recurring_service;
mod recurring_traits;


pub use idempotency::compute_occurrence_key;
pub use recurring_model::MaterializationSummary;
pub use recurring_scheduler::RecurringScheduler;
pub use recurring_service::{due_on, RecurringTransactionService};
pub use recurring_traits::RecurringTransactionServiceTrait;
