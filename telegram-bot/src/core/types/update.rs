//! Update: one event delivered to the bot.

use serde::{Deserialize, Serialize};

use super::message::{Document, Message};

/// Inbound update. Kinds other than `message` (edits, callbacks, ...) decode with `message: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Update {
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl Update {
    /// Message text, or "" when there is no message.
    pub fn text(&self) -> &str {
        self.message.as_ref().map(|m| m.text.as_str()).unwrap_or("")
    }

    /// Chat id of the message, if any.
    pub fn chat_id(&self) -> Option<i64> {
        self.message.as_ref().map(|m| m.chat.id)
    }

    /// Attached document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.message.as_ref().and_then(|m| m.document.as_ref())
    }
}
