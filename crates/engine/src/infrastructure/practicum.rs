//! Homework status API client

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use std::time::Duration;

use crate::infrastructure::config::BotConfig;
use crate::infrastructure::ports::{FetchError, StatusSourcePort};

/// Longest slice of an error body kept in `FetchError::HttpStatus`.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for the homework status endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            &config.endpoint,
            &config.practicum_token,
            config.request_timeout,
        )
    }
}

#[async_trait]
impl StatusSourcePort for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<serde_json::Value, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::http_status(
                status.as_u16(),
                shorten(&body, MAX_ERROR_BODY_CHARS),
            ));
        }
        tracing::debug!("Status API answered 200 OK");

        let body = response.text().await.map_err(classify_request_error)?;
        serde_json::from_str(&body).map_err(FetchError::parse)
    }
}

fn classify_request_error(error: reqwest::Error) -> FetchError {
    if error.is_builder() || error.is_redirect() {
        FetchError::other(error)
    } else {
        FetchError::transport(error)
    }
}

fn shorten(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
