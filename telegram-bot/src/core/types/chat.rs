//! Chat the message was posted in.

use serde::{Deserialize, Serialize};

/// Telegram chat. `id` is the target for replies; the rest is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chat {
    pub id: i64,
    /// "private", "group", "supergroup" or "channel".
    #[serde(rename = "type")]
    pub chat_type: String,
    pub title: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}
