//! One run of each collector: inspect the store, fetch, shape, gate.
//!
//! Collectors share no state; each owns its table files exclusively and
//! runs its stages strictly in order.

pub mod parking;
pub mod phpdt;
pub mod ridership;

use std::path::Path;
use tracing::info;

use crate::store::AppendOutcome;

/// The one status line per table an operator sees.
pub(crate) fn report_outcome(table: &Path, date: &str, outcome: AppendOutcome) {
    match outcome {
        AppendOutcome::Created(rows) => {
            info!(table = %table.display(), %date, rows, "created table")
        }
        AppendOutcome::Appended(rows) => {
            info!(table = %table.display(), %date, rows, "appended rows")
        }
        AppendOutcome::Skipped => {
            info!(table = %table.display(), %date, "data already exists, skipping")
        }
    }
}
