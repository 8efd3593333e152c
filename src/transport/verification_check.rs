use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    CheckTarget, CheckVerification, PhoneNumber, VerificationCheck, VerificationSid,
};
use crate::transport::TransportError;
use crate::transport::shape::{
    decode_sna_attempt_errors, decode_status, decode_valid, json_kind,
};

#[derive(Debug, Clone, Deserialize)]
struct VerificationCheckJsonResponse {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    service_sid: Option<String>,
    #[serde(default)]
    account_sid: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    valid: Option<Value>,
    #[serde(default)]
    sna_attempts_error_codes: Option<Value>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    date_updated: Option<String>,
}

pub fn encode_check_verification_form(request: &CheckVerification) -> Vec<(String, String)> {
    match request.target() {
        CheckTarget::PhoneNumber(to) => {
            vec![(PhoneNumber::FIELD.to_owned(), to.e164().to_owned())]
        }
        CheckTarget::VerificationSid(sid) => {
            vec![(VerificationSid::FIELD.to_owned(), sid.as_str().to_owned())]
        }
    }
}

pub fn decode_verification_check_json_response(
    json: &str,
) -> Result<VerificationCheck, TransportError> {
    let raw: Value = serde_json::from_str(json)?;
    if !raw.is_object() {
        return Err(TransportError::NotAnObject {
            found: json_kind(&raw),
        });
    }
    let parsed: VerificationCheckJsonResponse = serde_json::from_value(raw.clone())?;

    Ok(VerificationCheck {
        sid: parsed.sid,
        service_sid: parsed.service_sid,
        account_sid: parsed.account_sid,
        to: parsed.to,
        channel: parsed.channel,
        status: decode_status(parsed.status),
        valid: decode_valid(parsed.valid),
        sna_attempts_error_codes: decode_sna_attempt_errors(parsed.sna_attempts_error_codes),
        date_created: parsed.date_created,
        date_updated: parsed.date_updated,
        raw,
    })
}
