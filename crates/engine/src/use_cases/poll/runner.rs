//! The long-running poll loop.
//!
//! Every iteration failure is caught here, matched by kind, logged and
//! (optionally) reported to the chat. Nothing past startup stops the loop
//! except the shutdown future resolving.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::NotifierPort;

use super::{CheckHomeworkStatus, IterationOutcome, PollError};

/// Prefix of failure reports sent to the chat.
pub const FAILURE_REPORT_PREFIX: &str = "Bot failure";

/// Runs [`CheckHomeworkStatus`] forever with a fixed pause between passes.
pub struct StatusWatcher {
    check: CheckHomeworkStatus,
    notifier: Arc<dyn NotifierPort>,
    retry_period: Duration,
    report_errors: bool,
    last_reported_failure: Option<String>,
}

impl StatusWatcher {
    pub fn new(
        check: CheckHomeworkStatus,
        notifier: Arc<dyn NotifierPort>,
        retry_period: Duration,
        report_errors: bool,
    ) -> Self {
        Self {
            check,
            notifier,
            retry_period,
            report_errors,
            last_reported_failure: None,
        }
    }

    pub fn last_known_status(&self) -> &str {
        self.check.last_known_status()
    }

    /// Run one iteration and absorb its failure.
    ///
    /// The result is returned for the caller's information only; by the time
    /// it comes back, any error has already been logged and reported.
    pub async fn tick(&mut self) -> Result<IterationOutcome, PollError> {
        tracing::debug!("Starting poll iteration");

        let result = self.check.execute().await;
        match &result {
            Ok(outcome) => {
                tracing::debug!(?outcome, "Poll iteration finished");
                self.last_reported_failure = None;
            }
            Err(error) => self.handle_failure(error).await,
        }
        result
    }

    /// Poll until `shutdown` resolves.
    ///
    /// Shutdown is observed both during an iteration and during the sleep.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tracing::info!(
            retry_period_secs = self.retry_period.as_secs(),
            "Status watcher started"
        );
        tokio::pin!(shutdown);

        loop {
            let retry_period = self.retry_period;
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping status watcher");
                    return;
                }
                _ = async {
                    let _ = self.tick().await;
                    tokio::time::sleep(retry_period).await;
                } => {}
            }
        }
    }

    async fn handle_failure(&mut self, error: &PollError) {
        match error {
            PollError::Transport(_) => {
                tracing::error!(error = %error, kind = "transport", "Status API unreachable")
            }
            PollError::HttpStatus { status, .. } => {
                tracing::error!(error = %error, kind = "http_status", status, "Status API returned an error status")
            }
            PollError::Parse(_) => {
                tracing::error!(error = %error, kind = "parse", "Status API returned invalid JSON")
            }
            PollError::Schema(_) => {
                tracing::error!(error = %error, kind = "schema", "Status API response does not match the expected format")
            }
            PollError::Delivery(_) => {
                tracing::error!(error = %error, kind = "delivery", "Could not deliver status notification, will retry")
            }
            _ => tracing::error!(error = %error, kind = "unknown", "Unexpected failure in poll iteration"),
        }

        if !self.report_errors || !error.is_reportable() {
            return;
        }

        let report = format!("{}: {}", FAILURE_REPORT_PREFIX, error);
        if self.last_reported_failure.as_deref() == Some(report.as_str()) {
            tracing::debug!("Same failure already reported, not sending again");
            return;
        }

        match self.notifier.notify(report.clone()).await {
            Ok(()) => self.last_reported_failure = Some(report),
            Err(e) => tracing::warn!(error = %e, "Could not report failure to chat"),
        }
    }
}
