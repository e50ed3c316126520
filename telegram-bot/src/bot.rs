//! [`Bot`]: token-bound API client plus the command table, and update dispatch.
//!
//! Every operation that touches the command table (`add_command`, `handle_update`,
//! `handle_document`, inspection) takes the same async mutex and holds it for the whole call,
//! including the nested `sendMessage` of `handle_update`. Replies are therefore serialized per
//! bot, and a lookup never observes a half-applied registration.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::commands::{CommandHandler, CommandRegistry};
use crate::core::{BotError, Result, Update};
use crate::telegram::{ApiTransport, DEFAULT_API_URL};

/// Default total-request deadline of the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bot API client bound to one token. Share it as `Arc<Bot>` across tasks.
#[derive(Debug)]
pub struct Bot {
    pub(crate) transport: ApiTransport,
    commands: Mutex<CommandRegistry>,
}

/// Builder for [`Bot`]: API root, request deadline, or a preconfigured client.
#[derive(Debug, Clone)]
pub struct BotBuilder {
    token: String,
    api_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl BotBuilder {
    /// API root, e.g. a local Bot API server or a test double. Default `https://api.telegram.org`.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Total-request deadline; ignored when a client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses `client` as-is (its own deadline applies).
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Bot> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().timeout(self.timeout).build()?,
        };
        Ok(Bot {
            transport: ApiTransport::new(client, self.api_url, self.token),
            commands: Mutex::new(CommandRegistry::new()),
        })
    }
}

impl Bot {
    /// Bot with the default API root and a 30 s deadline.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    pub fn builder(token: impl Into<String>) -> BotBuilder {
        BotBuilder {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    pub fn token(&self) -> &str {
        self.transport.token()
    }

    pub fn api_url(&self) -> &str {
        self.transport.api_url()
    }

    /// Registers `handler` for the exact text `command`, replacing any previous handler.
    /// Waits for an in-flight dispatch to finish first.
    pub async fn add_command<H>(&self, command: impl Into<String>, handler: H)
    where
        H: CommandHandler + 'static,
    {
        let command = command.into();
        let mut commands = self.commands.lock().await;
        let replaced = commands.insert(command.clone(), Arc::new(handler));
        info!(command = %command, replaced, "Command registered");
    }

    pub async fn has_command(&self, command: &str) -> bool {
        self.commands.lock().await.contains(command)
    }

    pub async fn command_count(&self) -> usize {
        self.commands.lock().await.len()
    }

    /// Runs the handler registered for the message text and sends its reply to the same chat.
    ///
    /// Returns `Ok(true)` if a command matched, `Ok(false)` otherwise (no outbound call). A failed
    /// reply is logged and not returned.
    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    pub async fn handle_update(&self, update: &Update) -> Result<bool> {
        let commands = self.commands.lock().await;

        let Some(message) = update.message.as_ref() else {
            debug!("update has no message");
            return Ok(false);
        };
        let Some(handler) = commands.lookup(&message.text) else {
            debug!(chat_id = message.chat.id, "no command for message text");
            return Ok(false);
        };

        let chat_id = message.chat.id;
        let reply = handler.handle(chat_id);
        info!(chat_id, command = %message.text, reply_len = reply.len(), "step: command handled");

        if let Err(e) = self.send_message(chat_id, &reply).await {
            warn!(chat_id, error = %e, "Failed to send command reply");
        }
        drop(commands);
        Ok(true)
    }

    /// Resolves the update's document to a download URL and counts the lines of the file.
    ///
    /// Fails with [`BotError::NoDocument`] before any HTTP call when there is no document or its
    /// `file_id` is empty.
    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    pub async fn handle_document(&self, update: &Update) -> Result<usize> {
        let _commands = self.commands.lock().await;

        let file_id = update
            .document()
            .map(|d| d.file_id.as_str())
            .filter(|id| !id.is_empty())
            .ok_or(BotError::NoDocument)?;

        let url = self.get_file_url(file_id).await?;
        let lines = self.count_lines_at(&url).await?;
        info!(lines, "step: document lines counted");
        Ok(lines)
    }
}
