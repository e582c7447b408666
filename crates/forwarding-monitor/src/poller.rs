//! The poll loop: fetch, filter, notify, wait, repeat.
//!
//! A cycle never fails the loop. Fetch and delivery errors are logged and
//! the next attempt happens at the next tick; nothing is retried in-cycle.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use notify::{DeliverError, NotifyChannel};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::client::{ErrorSource, FetchError};
use crate::compose::compose;
use crate::model::ErrorReport;
use crate::window::{select_recent, WINDOW_SECS};

/// What a single cycle ended with.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The report could not be fetched; nothing was sent
    FetchFailed(FetchError),
    /// The report carried no errors at all
    NoErrors,
    /// The report had errors, none of them inside the window
    NoNewErrors,
    /// A notification for `count` errors was delivered
    Notified { count: usize },
    /// A notification for `count` errors was attempted and failed
    DeliveryFailed { count: usize, error: DeliverError },
}

impl CycleOutcome {
    /// Whether a notification was attempted this cycle.
    #[must_use]
    pub const fn attempted_delivery(&self) -> bool {
        matches!(self, Self::Notified { .. } | Self::DeliveryFailed { .. })
    }
}

/// Drives poll cycles for one integration.
pub struct Poller {
    source: Arc<dyn ErrorSource>,
    channel: Arc<dyn NotifyChannel>,
    console_base_url: String,
    poll_interval: Duration,
}

impl Poller {
    #[must_use]
    pub fn new(
        source: Arc<dyn ErrorSource>,
        channel: Arc<dyn NotifyChannel>,
        console_base_url: impl Into<String>,
        poll_interval: Duration,
    ) -> Self {
        let poll_interval = poll_interval.max(Duration::from_secs(1));
        if poll_interval > Duration::from_secs(WINDOW_SECS.unsigned_abs()) {
            warn!(
                poll_interval_secs = poll_interval.as_secs(),
                window_secs = WINDOW_SECS,
                "Poll interval is longer than the error window; errors between polls may be missed"
            );
        }

        Self {
            source,
            channel,
            console_base_url: console_base_url.into(),
            poll_interval,
        }
    }

    /// Run cycles forever, one per poll interval. The first cycle starts immediately.
    pub async fn run(&self) {
        info!(
            poll_interval_secs = self.poll_interval.as_secs(),
            channel = self.channel.name(),
            "Starting poll loop"
        );

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let outcome = self.run_cycle().await;
            debug!(?outcome, "Cycle finished");
        }
    }

    /// Run one fetch/filter/notify cycle.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let report = match self.source.fetch().await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "Error fetching data");
                return CycleOutcome::FetchFailed(e);
            }
        };

        self.handle_report(&report, Utc::now()).await
    }

    /// Filter `report` against the window ending at `now` and notify on new errors.
    pub async fn handle_report(&self, report: &ErrorReport, now: DateTime<Utc>) -> CycleOutcome {
        if report.errors.is_empty() {
            info!(integration_id = report.integration_id, "No errors reported");
            return CycleOutcome::NoErrors;
        }

        let recent = select_recent(report, now);
        if recent.is_empty() {
            info!(
                integration_id = report.integration_id,
                reported = report.errors.len(),
                "No new errors found"
            );
            return CycleOutcome::NoNewErrors;
        }

        let count = recent.len();
        info!(
            integration_id = report.integration_id,
            count, "Recent errors found, sending notification"
        );

        let message = compose(&recent, report.integration_id, &self.console_base_url);

        match self.channel.deliver(&message).await {
            Ok(()) => {
                info!(channel = self.channel.name(), count, "Notification sent successfully");
                CycleOutcome::Notified { count }
            }
            Err(e) => {
                error!(
                    channel = self.channel.name(),
                    error = %e,
                    "Error sending notification"
                );
                CycleOutcome::DeliveryFailed { count, error: e }
            }
        }
    }
}
