//! Sliding time window used to decide which errors are new.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::model::{ErrorEvent, ErrorReport};

/// Length of the window ending at the evaluation instant.
pub const WINDOW_SECS: i64 = 60;

/// The open interval `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// The window of [`WINDOW_SECS`] seconds ending at `now`.
    #[must_use]
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::seconds(WINDOW_SECS),
            end: now,
        }
    }

    /// Whether `t` lies strictly inside the window. Both bounds are excluded.
    #[must_use]
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start < t && t < self.end
    }
}

/// Select the errors of `report` that happened in the window ending at `now`.
///
/// Events whose timestamp does not parse are logged and skipped; the rest of
/// the batch is still evaluated. Input order is preserved.
#[must_use]
pub fn select_recent(report: &ErrorReport, now: DateTime<Utc>) -> Vec<ErrorEvent> {
    let window = TimeWindow::ending_at(now);

    report
        .errors
        .iter()
        .filter(|event| match event.parsed_timestamp() {
            Ok(t) => window.contains(t),
            Err(e) => {
                warn!(
                    timestamp = %event.timestamp,
                    error = %e,
                    "Skipping error with unparseable timestamp"
                );
                false
            }
        })
        .cloned()
        .collect()
}
