use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ValidationError;

fn validate_sid(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    // Service and verification SIDs end up in the request path.
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidSid {
            field,
            input: trimmed.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio account identifier (`AC...`), used as the basic-auth user name.
///
/// Invariant: non-empty, ASCII alphanumeric after trimming.
pub struct AccountSid(String);

impl AccountSid {
    /// Field name used in API payloads (`account_sid`).
    pub const FIELD: &'static str = "account_sid";

    /// Create a validated [`AccountSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_sid(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Verify service identifier (`VA...`).
///
/// Invariant: non-empty, ASCII alphanumeric after trimming.
pub struct ServiceSid(String);

impl ServiceSid {
    /// Field name used in API payloads (`service_sid`).
    pub const FIELD: &'static str = "service_sid";

    /// Create a validated [`ServiceSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_sid(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API key identifier (`SK...`), an alternative basic-auth user name.
///
/// Invariant: non-empty, ASCII alphanumeric after trimming.
pub struct ApiKeySid(String);

impl ApiKeySid {
    pub const FIELD: &'static str = "api_key_sid";

    /// Create a validated [`ApiKeySid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_sid(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Verification identifier (`VE...`) returned by the start call.
///
/// Invariant: non-empty, ASCII alphanumeric after trimming.
pub struct VerificationSid(String);

impl VerificationSid {
    /// Form field name used by the check endpoint (`VerificationSid`).
    pub const FIELD: &'static str = "VerificationSid";

    /// Create a validated [`VerificationSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_sid(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
/// Account auth token, used as the basic-auth password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The value is
/// redacted from `Debug` output.
pub struct AuthToken(SecretString);

impl Clone for AuthToken {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.expose().to_owned()))
    }
}

impl AuthToken {
    pub const FIELD: &'static str = "auth_token";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Expose the secret for signing a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug)]
/// API key secret paired with an [`ApiKeySid`].
///
/// Invariant: must not be empty. The value is redacted from `Debug` output.
pub struct ApiKeySecret(SecretString);

impl Clone for ApiKeySecret {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.expose().to_owned()))
    }
}

impl ApiKeySecret {
    pub const FIELD: &'static str = "api_key_secret";

    /// Create a validated [`ApiKeySecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Expose the secret for signing a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone)]
/// Destination phone number, parsed and normalized to E.164 (`To`).
///
/// The input must carry an explicit `+` country prefix; no default region is assumed.
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Form field name used by the Verify API (`To`).
    pub const FIELD: &'static str = "To";

    /// Parse and normalize a phone number into E.164.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !raw.starts_with('+') {
            return Err(ValidationError::MissingCountryCode { input: raw });
        }

        let parsed = phonenumber::parse(None, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// E.164 form with everything but the last four digits masked, for logs.
    pub fn masked(&self) -> String {
        mask_phone_number(&self.e164)
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164)
    }
}

/// Mask all but the last four characters of a phone number, keeping a leading `+`.
pub fn mask_phone_number(phone: &str) -> String {
    let chars = phone.chars().count();
    if chars <= 4 {
        return "*".repeat(chars);
    }

    let last: String = phone.chars().skip(chars - 4).collect();
    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(chars - 5), last)
    } else {
        format!("{}{}", "*".repeat(chars - 4), last)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery channel for a verification (`Channel`).
pub enum Channel {
    Sms,
    Call,
    Email,
    Whatsapp,
    /// Silent Network Authentication.
    #[default]
    Sna,
}

impl Channel {
    /// Form field name used by the Verify API (`Channel`).
    pub const FIELD: &'static str = "Channel";

    /// Wire value of this channel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Call => "call",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::Sna => "sna",
        }
    }

}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Verification status reported by the API.
///
/// Values unknown to this crate are preserved in [`VerificationStatus::Other`].
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    MaxAttemptsReached,
    Deleted,
    Failed,
    Expired,
    Other(String),
}

impl VerificationStatus {
    /// Map a wire value to a status.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "canceled" => Self::Canceled,
            "max_attempts_reached" => Self::MaxAttemptsReached,
            "deleted" => Self::Deleted,
            "failed" => Self::Failed,
            "expired" => Self::Expired,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire value of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Canceled => "canceled",
            Self::MaxAttemptsReached => "max_attempts_reached",
            Self::Deleted => "deleted",
            Self::Failed => "failed",
            Self::Expired => "expired",
            Self::Other(value) => value,
        }
    }

    /// `true` for [`VerificationStatus::Approved`].
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Error code reported for a single SNA attempt.
///
/// The API documents these as integers, but string-encoded values are accepted too.
/// Strings that do not parse as integers are preserved as [`SnaErrorCode::Text`].
pub enum SnaErrorCode {
    Numeric(i64),
    Text(String),
}

impl SnaErrorCode {
    /// Parse a string-encoded code, keeping it as text when it is not an integer.
    pub fn from_text(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(code) => Self::Numeric(code),
            Err(_) => Self::Text(value.to_owned()),
        }
    }

    /// Numeric value, if the code is numeric.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Numeric(code) => Some(*code),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for SnaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(code) => write!(f, "{code}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error code carried by an API error body (`code`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ApiErrorCode(i64);

impl ApiErrorCode {
    /// Wrap a raw API error code.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Raw numeric code.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known_kind(self) -> Option<KnownApiErrorCode> {
        KnownApiErrorCode::from_code(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// API error codes this crate gives a name to.
pub enum KnownApiErrorCode {
    AuthenticationFailed,
    ResourceNotFound,
    TooManyRequests,
    InvalidParameter,
    MaxCheckAttemptsReached,
    MaxSendAttemptsReached,
}

impl KnownApiErrorCode {
    /// Map a raw code to a known variant; unknown codes return `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            20003 => Self::AuthenticationFailed,
            20404 => Self::ResourceNotFound,
            20429 => Self::TooManyRequests,
            60200 => Self::InvalidParameter,
            60202 => Self::MaxCheckAttemptsReached,
            60203 => Self::MaxSendAttemptsReached,
            _ => return None,
        })
    }
}
