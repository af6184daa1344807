//! Telegram Bot API notifier

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::config::BotConfig;
use crate::infrastructure::ports::{DeliveryError, NotifierPort};

/// Longest text Telegram accepts in a single message.
pub const TELEGRAM_MAX_MESSAGE_LENGTH: usize = 4096;

/// Sends messages to one fixed chat through `sendMessage`.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(api_url: &str, token: &str, chat_id: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            &config.telegram_api_url,
            &config.telegram_token,
            &config.telegram_chat_id,
            config.request_timeout,
        )
    }
}

#[async_trait]
impl NotifierPort for TelegramNotifier {
    async fn notify(&self, text: String) -> Result<(), DeliveryError> {
        tracing::info!(chat_id = %self.chat_id, "Sending Telegram message");

        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text: truncate_message(&text, TELEGRAM_MAX_MESSAGE_LENGTH),
        };

        // The URL embeds the bot token; strip it from any error we surface.
        let response = self
            .client
            .post(format!("{}/bot{}/sendMessage", self.api_url, self.token))
            .json(&request)
            .send()
            .await
            .map_err(|e| DeliveryError::request(e.without_url()))?;

        let status = response.status();
        let reply = response.json::<SendMessageReply>().await;

        match reply {
            Ok(SendMessageReply { ok: true, .. }) if status.is_success() => {
                tracing::debug!("Telegram confirmed delivery");
                Ok(())
            }
            Ok(reply) => Err(DeliveryError::rejected(
                status.as_u16(),
                reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            )),
            Err(e) if status.is_success() => Err(DeliveryError::request(format!(
                "unreadable reply: {}",
                e.without_url()
            ))),
            Err(_) => Err(DeliveryError::rejected(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
            )),
        }
    }
}

/// Cut `text` to at most `max_chars` characters.
pub fn truncate_message(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

// =============================================================================
// Bot API types
// =============================================================================

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}
