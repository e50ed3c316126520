//! Telegram Bot API access: HTTP transport and the API methods on [`crate::Bot`].

mod api;
mod transport;

pub use transport::{mask_token, ApiTransport, DEFAULT_API_URL};
