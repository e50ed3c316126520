//! # Telegram bot client
//!
//! Client for the Telegram Bot HTTP API: poll for updates, dispatch exact-text commands to
//! registered handlers, send messages, upload documents, and count the lines of uploaded files.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use telegram_bot::{run_polling, Bot, PollOptions};
//!
//! # async fn example() -> telegram_bot::Result<()> {
//! let bot = Arc::new(Bot::new("123456:TOKEN")?);
//! bot.add_command("/ping", |_chat_id: i64| "pong".to_string()).await;
//! run_polling(bot, PollOptions::default(), std::future::pending()).await;
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod cursor;
pub mod line_count;
pub mod runner;
pub mod telegram;

pub use bot::{Bot, BotBuilder, DEFAULT_TIMEOUT};
pub use cli::{load_config, Cli, Commands};
pub use commands::{CommandHandler, CommandRegistry};
pub use config::BotConfig;
pub use crate::core::{
    init_tracing, BotError, BotErrorKind, Chat, Document, File, Message, Result, Update, User,
};
pub use cursor::UpdateCursor;
pub use line_count::{count_lines, count_lines_in, LineCounter};
pub use runner::{process_batch, run_polling, PollOptions};
pub use telegram::{mask_token, ApiTransport, DEFAULT_API_URL};
