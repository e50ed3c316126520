//! Host configuration loaded from the environment.

mod bot_config;


pub use bot_config::{
    BotConfig, DEFAULT_LOG_FILE, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS,
};
