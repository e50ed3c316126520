//! Message, document attachment and `getFile` result.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Inbound message. `text` is empty for non-text messages; `document` is set only when the user uploaded a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message_id: i64,
    pub from: User,
    pub chat: Chat,
    /// Unix seconds.
    pub date: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
}

/// Generic file attachment. `file_id` resolves to a download path via `getFile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub file_id: String,
    pub file_name: String,
    pub file_size: i64,
}

/// Result of `getFile`. `file_path` is relative to the file-download root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub file_id: String,
    pub file_size: i64,
    pub file_path: String,
}
