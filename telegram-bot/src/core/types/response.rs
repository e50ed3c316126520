//! API envelope: every Bot API response is `{"ok": true, "result": ...}` or `{"ok": false, "description": ...}`.

use serde::Deserialize;

/// Raw envelope as decoded from the response body.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i32>,
}
