use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    Field, JsonKind, SnaAttemptError, SnaAttemptErrors, SnaErrorCode, SnaPayload,
    VerificationStatus,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportCode {
    Int(i64),
    String(String),
}

impl TransportCode {
    fn into_code(self) -> SnaErrorCode {
        match self {
            Self::Int(value) => SnaErrorCode::Numeric(value),
            Self::String(value) => SnaErrorCode::from_text(&value),
        }
    }
}

pub fn json_kind(value: &Value) -> Option<JsonKind> {
    Some(match value {
        Value::Null => return None,
        Value::Bool(_) => JsonKind::Bool,
        Value::Number(_) => JsonKind::Number,
        Value::String(_) => JsonKind::String,
        Value::Array(_) => JsonKind::Array,
        Value::Object(_) => JsonKind::Object,
    })
}

/// Decode the `status` field; anything but a string is malformed.
pub fn decode_status(value: Option<Value>) -> Field<VerificationStatus> {
    match value {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::String(status)) => Field::Present(VerificationStatus::from_wire(&status)),
        Some(other) => malformed(&other),
    }
}

/// Decode the `valid` field; anything but a boolean is malformed.
pub fn decode_valid(value: Option<Value>) -> Field<bool> {
    match value {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::Bool(valid)) => Field::Present(valid),
        Some(other) => malformed(&other),
    }
}

/// Decode the `sna` field of a start response.
pub fn decode_sna_payload(value: Option<Value>) -> Field<SnaPayload> {
    match value {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::Object(map)) => {
            let url = match map.get("url") {
                Some(Value::String(url)) => Some(url.clone()),
                _ => None,
            };
            Field::Present(SnaPayload { url })
        }
        Some(other) => malformed(&other),
    }
}

/// Decode the `sna_attempts_error_codes` field of a check response.
///
/// Non-object entries are counted in [`SnaAttemptErrors::skipped`].
pub fn decode_sna_attempt_errors(value: Option<Value>) -> Field<SnaAttemptErrors> {
    let items = match value {
        None | Some(Value::Null) => return Field::Absent,
        Some(Value::Array(items)) => items,
        Some(other) => return malformed(&other),
    };

    let mut errors = SnaAttemptErrors::default();
    for item in items {
        match item {
            Value::Object(mut map) => {
                let attempt_sid = map.remove("attempt_sid").and_then(value_to_text);
                let code = map
                    .remove("code")
                    .and_then(|code| serde_json::from_value::<TransportCode>(code).ok())
                    .map(TransportCode::into_code);
                errors.entries.push(SnaAttemptError { attempt_sid, code });
            }
            _ => errors.skipped += 1,
        }
    }
    Field::Present(errors)
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn malformed<T>(value: &Value) -> Field<T> {
    match json_kind(value) {
        Some(found) => Field::Malformed { found },
        None => Field::Absent,
    }
}
