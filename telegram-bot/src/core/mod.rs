//! Core: wire types, error type, logger.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{BotError, BotErrorKind, Result};
pub use logger::{init_tracing, DEFAULT_LOG_FILTER};
pub use types::{ApiResponse, Chat, Document, File, Message, Update, User};
