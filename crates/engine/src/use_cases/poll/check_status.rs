//! Check homework status use case.
//!
//! One pass of fetch, validate, select, derive and notify-on-change.

use std::sync::Arc;

use hwstatus_domain::{EmptyListPolicy, HomeworkEnvelope, StatusMessage};

use crate::infrastructure::ports::{NotifierPort, StatusSourcePort};

use super::PollError;

/// What a successful iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// The status changed and the chat confirmed the notification.
    Notified(StatusMessage),
    /// Same message as last time - nothing sent.
    Unchanged,
    /// Empty homework list under [`EmptyListPolicy::Ignore`].
    NoHomeworks,
}

/// Detects status changes of the latest homework and notifies the chat.
///
/// Holds the last-known status for the lifetime of the process. It starts
/// empty, so the first successful poll always notifies.
pub struct CheckHomeworkStatus {
    source: Arc<dyn StatusSourcePort>,
    notifier: Arc<dyn NotifierPort>,
    from_date: i64,
    empty_list_policy: EmptyListPolicy,
    last_known_status: String,
}

impl CheckHomeworkStatus {
    pub fn new(
        source: Arc<dyn StatusSourcePort>,
        notifier: Arc<dyn NotifierPort>,
        from_date: i64,
        empty_list_policy: EmptyListPolicy,
    ) -> Self {
        Self {
            source,
            notifier,
            from_date,
            empty_list_policy,
            last_known_status: String::new(),
        }
    }

    /// The most recently delivered status message (empty before the first).
    pub fn last_known_status(&self) -> &str {
        &self.last_known_status
    }

    /// Run one iteration.
    ///
    /// The last-known status is only replaced after the notifier confirms the
    /// send, so a failed delivery is retried on the next call.
    ///
    /// # Errors
    ///
    /// - `PollError::Transport` / `HttpStatus` / `Parse` / `Unknown` from the fetch
    /// - `PollError::Schema` if the envelope or selected homework is malformed
    /// - `PollError::Delivery` if the chat did not confirm the notification
    pub async fn execute(&mut self) -> Result<IterationOutcome, PollError> {
        let body = self.source.fetch_statuses(self.from_date).await?;

        let envelope = HomeworkEnvelope::from_value(body)?;
        tracing::debug!(
            homeworks = envelope.len(),
            current_date = ?envelope.current_date(),
            "Status API response is well-formed"
        );

        let Some(homework) = envelope.latest_homework(self.empty_list_policy)? else {
            tracing::info!("Homework list is empty, nothing to report");
            return Ok(IterationOutcome::NoHomeworks);
        };

        let message = homework.status_message();
        if message.as_str() == self.last_known_status {
            tracing::info!(
                homework = %homework.name(),
                status = %homework.status(),
                "Status unchanged"
            );
            return Ok(IterationOutcome::Unchanged);
        }

        self.notifier.notify(message.to_string()).await?;
        self.last_known_status = message.to_string();

        tracing::info!(
            homework = %homework.name(),
            status = %homework.status(),
            "Status change delivered"
        );
        Ok(IterationOutcome::Notified(message))
    }
}
