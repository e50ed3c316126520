//! Shared helpers for integration tests: bot bound to a mockito server, update builders, tracing.

#![allow(dead_code)]

use std::sync::Once;

use telegram_bot::{Bot, Chat, Document, Message, Update, User};
use tracing_subscriber::{fmt, EnvFilter};

/// Request paths are `/bot<token>/<method>`.
pub const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process; `RUST_LOG` controls the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,telegram_bot=debug"));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn method_path(method: &str) -> String {
    format!("/bot{}/{}", TEST_BOT_TOKEN, method)
}

pub fn file_path(path: &str) -> String {
    format!("/file/bot{}/{}", TEST_BOT_TOKEN, path)
}

/// Bot whose API root is the mock server.
pub fn bot_for(server: &mockito::ServerGuard) -> Bot {
    Bot::builder(TEST_BOT_TOKEN)
        .api_url(server.url())
        .build()
        .expect("Bot::build must succeed in tests")
}

pub fn text_update(update_id: i64, text: &str, chat_id: i64) -> Update {
    Update {
        update_id,
        message: Some(Message {
            message_id: update_id,
            from: User {
                id: 123,
                first_name: "Test".to_string(),
                username: "test_user".to_string(),
                ..User::default()
            },
            chat: Chat {
                id: chat_id,
                chat_type: "private".to_string(),
                ..Chat::default()
            },
            date: 1_706_529_600,
            text: text.to_string(),
            document: None,
        }),
    }
}

pub fn document_update(update_id: i64, file_id: &str, file_name: &str, chat_id: i64) -> Update {
    let mut update = text_update(update_id, "", chat_id);
    if let Some(message) = update.message.as_mut() {
        message.document = Some(Document {
            file_id: file_id.to_string(),
            file_name: file_name.to_string(),
            file_size: 0,
        });
    }
    update
}

/// `sendMessage` success body.
pub fn sent_message_body(chat_id: i64, text: &str) -> String {
    serde_json::json!({
        "ok": true,
        "result": {
            "message_id": 1,
            "date": 1706529600,
            "chat": {"id": chat_id, "type": "private"},
            "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
            "text": text
        }
    })
    .to_string()
}
