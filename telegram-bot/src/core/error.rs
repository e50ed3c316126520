//! Error types for the bot client.
//!
//! [`BotError`] has one variant per failure kind, in the order the transport detects them:
//! network, HTTP status, JSON decode, envelope `ok: false`. [`BotErrorKind`] lets callers branch
//! on the kind without destructuring.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level error for API calls, dispatch and file handling.
#[derive(Error, Debug)]
pub enum BotError {
    /// Connect, TLS, read or deadline failure. The request URL is stripped: it embeds the token.
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    #[error("HTTP error calling {method}: {status}")]
    HttpStatus {
        method: String,
        status: StatusCode,
        body: String,
    },

    #[error("Decode error calling {method}: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API error calling {method}: {}", .description.as_deref().unwrap_or("ok=false"))]
    ApiNotOk {
        method: String,
        error_code: Option<i32>,
        description: Option<String>,
    },

    #[error("No document in update")]
    NoDocument,

    #[error("Local file error ({}): {source}", .path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File download failed: {status}")]
    DownloadFailed { status: StatusCode },
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

/// Discriminant of [`BotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotErrorKind {
    Transport,
    HttpStatus,
    Decode,
    ApiNotOk,
    NoDocument,
    LocalIo,
    DownloadFailed,
}

impl BotError {
    pub fn kind(&self) -> BotErrorKind {
        match self {
            Self::Transport(_) => BotErrorKind::Transport,
            Self::HttpStatus { .. } => BotErrorKind::HttpStatus,
            Self::Decode { .. } => BotErrorKind::Decode,
            Self::ApiNotOk { .. } => BotErrorKind::ApiNotOk,
            Self::NoDocument => BotErrorKind::NoDocument,
            Self::LocalIo { .. } => BotErrorKind::LocalIo,
            Self::DownloadFailed { .. } => BotErrorKind::DownloadFailed,
        }
    }

    /// Decode error for a well-formed body with the wrong shape (e.g. `ok: true` without `result`).
    pub(crate) fn unexpected_shape(method: &str, msg: &str) -> Self {
        Self::Decode {
            method: method.to_string(),
            source: <serde_json::Error as serde::de::Error>::custom(msg),
        }
    }
}

/// Result type for client operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
