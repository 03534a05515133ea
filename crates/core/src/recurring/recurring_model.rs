//! Recurring-run domain models.

use serde::{Deserialize, Serialize};

/// Outcome of one materialization run over all recurring templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaterializationSummary {
    /// Number of templates fetched for this run.
    pub templates_scanned: usize,
    /// Occurrences persisted during this run.
    pub spawned: usize,
    /// Due templates skipped because today's occurrence already existed.
    pub duplicates_skipped: usize,
    /// Due templates whose spawn failed; they are retried naturally on the
    /// next day they are due.
    pub failed: usize,
}

impl MaterializationSummary {
    /// True when every due template either spawned or was already
    /// materialized today.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
