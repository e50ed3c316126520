//! Bot API methods on [`Bot`]: `sendMessage`, `getUpdates`, `getFile`, `sendDocument`, and file download.
//!
//! Each is a single call over [`super::ApiTransport`]; errors surface unchanged and nothing is retried.

use std::path::Path;

use reqwest::{multipart, Response};
use tracing::{info, instrument};

use crate::bot::Bot;
use crate::core::{BotError, File, Message, Result, Update};
use crate::line_count;

impl Bot {
    /// Sends `text` verbatim (no parse mode, no escaping). Empty text is forwarded; the API rejects it.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message> {
        let params = [("chat_id", chat_id.to_string()), ("text", text.to_string())];
        let sent: Message = self.transport.post_form("sendMessage", &params).await?;
        info!(chat_id, message_id = sent.message_id, "Sent message");
        Ok(sent)
    }

    /// Updates with `update_id >= offset`, in wire order. No long-poll `timeout` is sent.
    /// The caller advances the offset after consuming the batch.
    #[instrument(skip(self))]
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let params = [("offset", offset.to_string())];
        let updates: Vec<Update> = self.transport.post_form("getUpdates", &params).await?;
        info!(count = updates.len(), "Fetched updates");
        Ok(updates)
    }

    /// File metadata for `file_id`, including its path under the download root.
    #[instrument(skip(self))]
    pub async fn get_file(&self, file_id: &str) -> Result<File> {
        let params = [("file_id", file_id.to_string())];
        self.transport.post_form("getFile", &params).await
    }

    /// Resolves `file_id` to `<root>/file/bot<TOKEN>/<file_path>`.
    ///
    /// Any `ok` 2xx result yields a URL; a missing `file_path` decodes as empty and the URL ends
    /// at the download root.
    #[instrument(skip(self))]
    pub async fn get_file_url(&self, file_id: &str) -> Result<String> {
        let file = self.get_file(file_id).await?;
        Ok(self.transport.file_url(&file.file_path))
    }

    /// Uploads the file at `path` as a document. The part's filename is the path's basename;
    /// `caption` is sent only when present and non-empty.
    #[instrument(skip(self, path, caption), fields(file = %path.as_ref().display()))]
    pub async fn send_document(
        &self,
        chat_id: i64,
        path: impl AsRef<Path>,
        caption: Option<&str>,
    ) -> Result<Message> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| BotError::LocalIo {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let size = contents.len();

        let mut form = multipart::Form::new()
            .part(
                "document",
                multipart::Part::bytes(contents).file_name(file_name.clone()),
            )
            .text("chat_id", chat_id.to_string());
        if let Some(caption) = caption.filter(|c| !c.is_empty()) {
            form = form.text("caption", caption.to_string());
        }

        let sent: Message = self.transport.post_multipart("sendDocument", form).await?;
        info!(chat_id, file_name = %file_name, size, "Sent document");
        Ok(sent)
    }

    /// [`Bot::send_document`] with an empty caption meaning "no caption".
    pub async fn send_file(
        &self,
        chat_id: i64,
        path: impl AsRef<Path>,
        caption: &str,
    ) -> Result<Message> {
        self.send_document(chat_id, path, Some(caption)).await
    }

    /// GETs `url`; on 2xx returns the response with its body unread so the caller can stream it.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        self.transport.get(url).await
    }

    /// Downloads `url` and counts its lines without buffering the whole body.
    pub async fn count_lines_at(&self, url: &str) -> Result<usize> {
        let response = self.download_file(url).await?;
        line_count::count_lines(response).await
    }
}
