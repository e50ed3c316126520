//! Long-running poll loop: fetch a batch, dispatch each update in wire order, advance the cursor.
//!
//! Errors from `getUpdates` are logged and retried after the poll interval. The loop stops when the
//! shutdown future resolves and returns the cursor position so a host can resume from it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, instrument, warn};

use crate::bot::Bot;
use crate::core::Update;
use crate::cursor::UpdateCursor;

/// Poll loop settings.
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Offset of the first `getUpdates`.
    pub initial_offset: i64,
    /// Delay after an empty batch or a failed poll.
    pub poll_interval: Duration,
    /// Count lines of uploaded documents and reply with the result.
    pub count_documents: bool,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            initial_offset: 0,
            poll_interval: Duration::from_secs(1),
            count_documents: false,
        }
    }
}

/// Dispatches one batch. Updates the cursor does not accept are skipped; every other update
/// advances it, whether or not a command matched. Returns the number of commands dispatched.
pub async fn process_batch(
    bot: &Bot,
    cursor: &mut UpdateCursor,
    updates: Vec<Update>,
    count_documents: bool,
) -> usize {
    let mut dispatched = 0;
    for update in updates {
        if !cursor.accepts(update.update_id) {
            warn!(
                update_id = update.update_id,
                cursor = cursor.position(),
                "Skipping update behind cursor"
            );
            continue;
        }

        match bot.handle_update(&update).await {
            Ok(true) => dispatched += 1,
            Ok(false) => {}
            Err(e) => error!(update_id = update.update_id, error = %e, "Update dispatch failed"),
        }

        if count_documents && update.document().is_some() {
            reply_with_line_count(bot, &update).await;
        }

        cursor.advance(update.update_id);
    }
    dispatched
}

async fn reply_with_line_count(bot: &Bot, update: &Update) {
    let (Some(chat_id), Some(document)) = (update.chat_id(), update.document()) else {
        return;
    };
    let name = if document.file_name.is_empty() {
        "document"
    } else {
        document.file_name.as_str()
    };

    match bot.handle_document(update).await {
        Ok(lines) => {
            let reply = format!("{}: {} lines", name, lines);
            if let Err(e) = bot.send_message(chat_id, &reply).await {
                warn!(chat_id, error = %e, "Failed to send line count");
            }
        }
        Err(e) => warn!(update_id = update.update_id, file_name = %name, error = %e, "Line count failed"),
    }
}

/// Polls until `shutdown` resolves. Returns the final cursor position.
#[instrument(skip(bot, shutdown))]
pub async fn run_polling<S>(bot: Arc<Bot>, options: PollOptions, shutdown: S) -> i64
where
    S: Future<Output = ()>,
{
    let mut cursor = UpdateCursor::new(options.initial_offset);
    tokio::pin!(shutdown);

    info!(offset = cursor.position(), "Polling started");

    loop {
        let polled = tokio::select! {
            _ = &mut shutdown => break,
            polled = bot.get_updates(cursor.position()) => polled,
        };

        let idle = match polled {
            Ok(updates) => {
                let idle = updates.is_empty();
                let dispatched =
                    process_batch(&bot, &mut cursor, updates, options.count_documents).await;
                if !idle {
                    info!(dispatched, offset = cursor.position(), "step: batch processed");
                }
                idle
            }
            Err(e) => {
                error!(error = %e, kind = ?e.kind(), offset = cursor.position(), "getUpdates failed");
                true
            }
        };

        if idle {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(options.poll_interval) => {}
            }
        }
    }

    info!(offset = cursor.position(), "Polling stopped");
    cursor.position()
}
