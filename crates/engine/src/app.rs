//! Application composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::BotConfig,
    ports::{NotifierPort, StatusSourcePort},
    practicum::PracticumClient,
    telegram::TelegramNotifier,
};
use crate::use_cases::{CheckHomeworkStatus, StatusWatcher};

/// Wired-up adapters for one bot process.
pub struct App {
    pub source: Arc<dyn StatusSourcePort>,
    pub notifier: Arc<dyn NotifierPort>,
}

impl App {
    /// Build the real HTTP adapters from configuration.
    pub fn new(config: &BotConfig) -> Self {
        Self {
            source: Arc::new(PracticumClient::from_config(config)),
            notifier: Arc::new(TelegramNotifier::from_config(config)),
        }
    }

    /// Build a watcher over the given adapters.
    pub fn watcher(&self, config: &BotConfig) -> StatusWatcher {
        let check = CheckHomeworkStatus::new(
            self.source.clone(),
            self.notifier.clone(),
            config.from_date,
            config.empty_list_policy,
        );
        StatusWatcher::new(
            check,
            self.notifier.clone(),
            config.retry_period,
            config.report_errors,
        )
    }
}
