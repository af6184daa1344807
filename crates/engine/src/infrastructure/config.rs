//! Startup configuration.
//!
//! Everything is read once from the environment into [`BotConfig`] and passed
//! down explicitly. Loading goes through a lookup function so tests can supply
//! a map instead of mutating the process environment.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use hwstatus_domain::EmptyListPolicy;

/// Default homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Default pause between polls.
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Default timeout for each HTTP request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default log file, appended to across restarts.
pub const DEFAULT_LOG_FILE: &str = "main.log";

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Configuration errors. Any of these stops the process before polling starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the watcher needs to run.
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
    pub from_date: i64,
    pub empty_list_policy: EmptyListPolicy,
    pub report_errors: bool,
    pub log_file: PathBuf,
}

impl BotConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Empty values count as unset. All missing required variables are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let practicum_token = get(PRACTICUM_TOKEN);
        let telegram_token = get(TELEGRAM_TOKEN);
        let telegram_chat_id = get(TELEGRAM_CHAT_ID);

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token.clone(), telegram_token.clone(), telegram_chat_id.clone())
        else {
            let missing = [
                (PRACTICUM_TOKEN, practicum_token.is_none()),
                (TELEGRAM_TOKEN, telegram_token.is_none()),
                (TELEGRAM_CHAT_ID, telegram_chat_id.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, is_missing)| is_missing.then_some(name))
            .collect();
            return Err(ConfigError::MissingVariables(missing));
        };

        let retry_period = Duration::from_secs(parse_or(
            &get,
            "HWSTATUS_RETRY_PERIOD_SECS",
            DEFAULT_RETRY_PERIOD_SECS,
        )?);
        if retry_period.is_zero() {
            return Err(ConfigError::Invalid {
                var: "HWSTATUS_RETRY_PERIOD_SECS",
                value: "0".to_string(),
                reason: "retry period must be positive".to_string(),
            });
        }
        let request_timeout = Duration::from_secs(parse_or(
            &get,
            "HWSTATUS_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);
        if request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: "HWSTATUS_REQUEST_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "timeout must be positive".to_string(),
            });
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: get("HWSTATUS_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period,
            request_timeout,
            from_date: parse_or(&get, "HWSTATUS_FROM_DATE", 0)?,
            empty_list_policy: parse_or(&get, "HWSTATUS_EMPTY_LIST", EmptyListPolicy::default())?,
            report_errors: parse_bool_or(&get, "HWSTATUS_REPORT_ERRORS", true)?,
            log_file: get("HWSTATUS_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}

// Tokens stay out of logs.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .field("from_date", &self.from_date)
            .field("empty_list_policy", &self.empty_list_policy)
            .field("report_errors", &self.report_errors)
            .field("log_file", &self.log_file)
            .finish()
    }
}

fn parse_or<T, G>(get: &G, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        }
    }
}

fn parse_bool_or<G>(get: &G, var: &'static str, default: bool) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        None => Ok(default),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                var,
                value,
                reason: "expected true or false".to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "t-token"),
        ("TELEGRAM_CHAT_ID", "12345"),
    ];

    #[test]
    fn applies_defaults() {
        let cfg = BotConfig::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(cfg.practicum_token, "p-token");
        assert_eq!(cfg.telegram_chat_id, "12345");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(cfg.retry_period, Duration::from_secs(600));
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert_eq!(cfg.from_date, 0);
        assert_eq!(cfg.empty_list_policy, EmptyListPolicy::Error);
        assert!(cfg.report_errors);
        assert_eq!(cfg.log_file, PathBuf::from("main.log"));
    }

    #[test]
    fn reports_every_missing_variable() {
        let err = BotConfig::from_lookup(lookup(&[("TELEGRAM_TOKEN", "t")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVariables(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"])
        );
        assert!(err.to_string().contains("PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs[2] = ("TELEGRAM_CHAT_ID", "  ");
        let err = BotConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::MissingVariables(vec!["TELEGRAM_CHAT_ID"]));
    }

    #[test]
    fn reads_optional_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("HWSTATUS_ENDPOINT", "http://127.0.0.1:9000/statuses/"),
            ("HWSTATUS_RETRY_PERIOD_SECS", "30"),
            ("HWSTATUS_REQUEST_TIMEOUT_SECS", "3"),
            ("HWSTATUS_FROM_DATE", "1700000000"),
            ("HWSTATUS_EMPTY_LIST", "ignore"),
            ("HWSTATUS_REPORT_ERRORS", "off"),
            ("TELEGRAM_API_URL", "http://127.0.0.1:9001"),
            ("HWSTATUS_LOG_FILE", "/tmp/bot.log"),
        ]);
        let cfg = BotConfig::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(cfg.endpoint, "http://127.0.0.1:9000/statuses/");
        assert_eq!(cfg.retry_period, Duration::from_secs(30));
        assert_eq!(cfg.request_timeout, Duration::from_secs(3));
        assert_eq!(cfg.from_date, 1_700_000_000);
        assert_eq!(cfg.empty_list_policy, EmptyListPolicy::Ignore);
        assert!(!cfg.report_errors);
        assert_eq!(cfg.telegram_api_url, "http://127.0.0.1:9001");
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/bot.log"));
    }

    #[test]
    fn rejects_malformed_optional_values() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("HWSTATUS_RETRY_PERIOD_SECS", "ten minutes"));
        let err = BotConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { var: "HWSTATUS_RETRY_PERIOD_SECS", .. }
        ));

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("HWSTATUS_EMPTY_LIST", "skip"));
        assert!(BotConfig::from_lookup(lookup(&pairs)).is_err());

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("HWSTATUS_REPORT_ERRORS", "maybe"));
        assert!(BotConfig::from_lookup(lookup(&pairs)).is_err());

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("HWSTATUS_REQUEST_TIMEOUT_SECS", "0"));
        assert!(BotConfig::from_lookup(lookup(&pairs)).is_err());

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("HWSTATUS_RETRY_PERIOD_SECS", "0"));
        let err = BotConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { var: "HWSTATUS_RETRY_PERIOD_SECS", .. }
        ));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let cfg = BotConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        let debug = format!("{:?}", cfg);
        assert!(!debug.contains("p-token"));
        assert!(!debug.contains("t-token"));
        assert!(debug.contains("<redacted>"));
    }
}
