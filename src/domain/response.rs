use std::fmt;

use crate::domain::value::{SnaErrorCode, VerificationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// JSON kind of a value that did not have the expected shape.
pub enum JsonKind {
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A loosely-typed response field decoded into one of three states.
///
/// `Absent` covers both a missing key and an explicit `null`.
pub enum Field<T> {
    Absent,
    Malformed { found: JsonKind },
    Present(T),
}

impl<T> Field<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The `sna` object of a start response.
pub struct SnaPayload {
    /// One-time confirmation URL; `None` when the key is missing or not a string.
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of `sna_attempts_error_codes`.
pub struct SnaAttemptError {
    pub attempt_sid: Option<String>,
    pub code: Option<SnaErrorCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Decoded `sna_attempts_error_codes` list.
///
/// Entries that were not JSON objects are not decoded; they are only counted.
pub struct SnaAttemptErrors {
    pub entries: Vec<SnaAttemptError>,
    pub skipped: usize,
}

impl SnaAttemptErrors {
    /// Number of entries the API returned, including skipped ones.
    pub fn total(&self) -> usize {
        self.entries.len() + self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Verification resource returned by the start call.
pub struct Verification {
    pub sid: Option<String>,
    pub service_sid: Option<String>,
    pub account_sid: Option<String>,
    pub to: Option<String>,
    pub channel: Option<String>,
    pub status: Field<VerificationStatus>,
    pub valid: Field<bool>,
    pub sna: Field<SnaPayload>,
    pub url: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    /// Response body as returned by the API.
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
/// Verification check resource returned by the check call.
pub struct VerificationCheck {
    pub sid: Option<String>,
    pub service_sid: Option<String>,
    pub account_sid: Option<String>,
    pub to: Option<String>,
    pub channel: Option<String>,
    pub status: Field<VerificationStatus>,
    pub valid: Field<bool>,
    pub sna_attempts_error_codes: Field<SnaAttemptErrors>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    /// Response body as returned by the API.
    pub raw: serde_json::Value,
}
