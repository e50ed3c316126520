//! BotConfig: token, API root, request deadline, poll interval and log file. Loaded from env.

use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::bot::Bot;
use crate::telegram::DEFAULT_API_URL;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_LOG_FILE: &str = "logs/linecount-bot.log";

/// Host configuration. Use [`BotConfig::load`] for env-based loading, then [`BotConfig::validate`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL
    pub telegram_api_url: String,
    /// TELEGRAM_TIMEOUT_SECS: total-request deadline
    pub timeout_secs: u64,
    /// POLL_INTERVAL_MS: delay after an empty or failed poll
    pub poll_interval_ms: u64,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Unparsable numbers fall back to their defaults.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url =
            env::var("TELEGRAM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("TELEGRAM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let poll_interval_ms = env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            timeout_secs,
            poll_interval_ms,
            log_file,
        })
    }

    /// Builds config with the given token; everything else at defaults.
    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            telegram_api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if reqwest::Url::parse(&self.telegram_api_url).is_err() {
            anyhow::bail!(
                "TELEGRAM_API_URL is set but not a valid URL: {}",
                self.telegram_api_url
            );
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("TELEGRAM_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Builds a [`Bot`] against the configured API root and deadline.
    pub fn build_bot(&self) -> crate::core::Result<Bot> {
        Bot::builder(self.bot_token.clone())
            .api_url(self.telegram_api_url.clone())
            .timeout(self.timeout())
            .build()
    }
}
