//! Wire model of the Bot API: updates, messages, users, chats, documents and the response envelope.
//!
//! One file per main type. Field names match the wire (snake_case); decoding ignores unknown
//! fields and fills missing ones with zero values.

mod chat;
mod message;
mod response;
mod update;
mod user;

pub use chat::Chat;
pub use message::{Document, File, Message};
pub use response::ApiResponse;
pub use update::Update;
pub use user::User;
