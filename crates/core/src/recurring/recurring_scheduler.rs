//! Background scheduler for daily recurring-transaction materialization.
//!
//! Owns a single tokio task that wakes at every local midnight and runs the
//! materialization batch. Explicitly constructed and started so hosts (and
//! tests) control the lifecycle; there is no process-wide job state.

use std::sync::Arc;

use chrono::{Local, Utc};
use log::{error, info};
use tokio::task::JoinHandle;

use crate::recurring::recurring_traits::RecurringTransactionServiceTrait;
use crate::utils::time_utils::until_next_midnight;

/// Drives [`RecurringTransactionServiceTrait::run_once`] once per calendar
/// day, anchored at local midnight.
///
/// At most one run is in flight at a time: the single task awaits each run
/// before sleeping toward the next midnight. Re-entrancy across runs is
/// instead handled by the occurrence idempotency keys, so an overlapping
/// external trigger cannot double-spawn either.
pub struct RecurringScheduler {
    recurring_service: Arc<dyn RecurringTransactionServiceTrait>,
    handle: Option<JoinHandle<()>>,
}

impl RecurringScheduler {
    /// Creates a stopped scheduler around the given service.
    pub fn new(recurring_service: Arc<dyn RecurringTransactionServiceTrait>) -> Self {
        Self {
            recurring_service,
            handle: None,
        }
    }

    /// Starts the daily timer task. Calling `start` while already running is
    /// a no-op.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let service = Arc::clone(&self.recurring_service);
        self.handle = Some(tokio::spawn(async move {
            info!("Recurring transaction scheduler started (daily at local midnight)");

            loop {
                // Sleep target is the next local midnight, recomputed from
                // the wall clock each cycle
                let wait = until_next_midnight(Local::now());
                tokio::time::sleep(wait).await;

                match service.run_once(Utc::now()).await {
                    Ok(summary) => {
                        info!(
                            "Scheduled recurring run completed: {} spawned, {} duplicates skipped, {} failed",
                            summary.spawned, summary.duplicates_skipped, summary.failed
                        );
                    }
                    Err(e) => {
                        error!("Scheduled recurring run failed: {}", e);
                    }
                }
            }
        }));
    }

    /// Stops the timer task. A run already in flight is aborted between
    /// persistence calls at the next await point.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Recurring transaction scheduler stopped");
        }
    }

    /// True while the timer task is alive.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for RecurringScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
