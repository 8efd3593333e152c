use serde::Deserialize;

use crate::domain::ApiErrorCode;

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: Option<ApiErrorCode>,
    pub message: Option<String>,
    pub more_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorJson {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    more_info: Option<String>,
}

/// Decode an API error body; returns `None` when the body carries neither code nor message.
pub fn decode_api_error_body(body: &str) -> Option<ApiErrorBody> {
    let parsed: ApiErrorJson = serde_json::from_str(body).ok()?;
    if parsed.code.is_none() && parsed.message.is_none() {
        return None;
    }

    Some(ApiErrorBody {
        code: parsed.code.map(ApiErrorCode::new),
        message: parsed.message,
        more_info: parsed.more_info,
    })
}
