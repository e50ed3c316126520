//! HTTP transport for the Bot API: POST a named method with a form or multipart body and decode
//! the `ok`/`result` envelope. Also plain GET for file downloads.
//!
//! Errors are reported in detection order: transport, HTTP status, decode, `ok: false`.
//! Nothing is retried here; retry policy belongs to the caller.

use std::fmt;

use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::core::{ApiResponse, BotError, Result};

/// Default API root; method URLs are `<root>/bot<TOKEN>/<METHOD>`.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Masks a token for safe logging: first 7 + "***" + last 4 chars; tokens of 11 chars or fewer become "***".
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Bot API transport bound to one token. Cheap to clone; the underlying client pools connections.
#[derive(Clone)]
pub struct ApiTransport {
    client: Client,
    api_url: String,
    token: String,
}

impl fmt::Debug for ApiTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiTransport")
            .field("api_url", &self.api_url)
            .field("token", &mask_token(&self.token))
            .finish()
    }
}

impl ApiTransport {
    /// `api_url` is the API root without a trailing slash requirement (one is stripped if present).
    pub fn new(client: Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            api_url,
            token: token.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `<root>/bot<TOKEN>/<METHOD>`
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// `<root>/file/bot<TOKEN>/<FILE_PATH>`
    pub fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.api_url, self.token, file_path)
    }

    /// POSTs `params` URL-encoded and decodes the envelope's `result` into `T`.
    #[instrument(skip(self, params), fields(param_count = params.len()))]
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .post(self.method_url(method))
            .form(params)
            .send()
            .await?;
        decode_envelope(method, response).await
    }

    /// POSTs a multipart body and decodes the envelope's `result` into `T`.
    #[instrument(skip(self, form))]
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        method: &str,
        form: multipart::Form,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.method_url(method))
            .multipart(form)
            .send()
            .await?;
        decode_envelope(method, response).await
    }

    /// Plain GET; any non-2xx status is [`BotError::DownloadFailed`]. The body is left unread for streaming.
    #[instrument(skip_all)]
    pub async fn get(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "download rejected");
            return Err(BotError::DownloadFailed { status });
        }
        Ok(response)
    }
}

/// Status check, then JSON decode, then `ok` check. The body is fully consumed either way.
async fn decode_envelope<T: DeserializeOwned>(method: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!(method = %method, status = %status, body = %body, "non-2xx response");
        return Err(BotError::HttpStatus {
            method: method.to_string(),
            status,
            body,
        });
    }

    let bytes = response.bytes().await?;
    let envelope: ApiResponse<T> =
        serde_json::from_slice(&bytes).map_err(|source| BotError::Decode {
            method: method.to_string(),
            source,
        })?;

    if !envelope.ok {
        return Err(BotError::ApiNotOk {
            method: method.to_string(),
            error_code: envelope.error_code,
            description: envelope.description,
        });
    }

    envelope
        .result
        .ok_or_else(|| BotError::unexpected_shape(method, "ok=true without result"))
}
