use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Channel, PhoneNumber, StartVerification, Verification};
use crate::transport::TransportError;
use crate::transport::shape::{decode_sna_payload, decode_status, decode_valid, json_kind};

#[derive(Debug, Clone, Deserialize)]
struct VerificationJsonResponse {
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
    sna: Option<Value>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    date_updated: Option<String>,
}

pub fn encode_start_verification_form(request: &StartVerification) -> Vec<(String, String)> {
    vec![
        (
            PhoneNumber::FIELD.to_owned(),
            request.to().e164().to_owned(),
        ),
        (
            Channel::FIELD.to_owned(),
            request.channel().as_str().to_owned(),
        ),
    ]
}

pub fn decode_verification_json_response(json: &str) -> Result<Verification, TransportError> {
    let raw: Value = serde_json::from_str(json)?;
    if !raw.is_object() {
        return Err(TransportError::NotAnObject {
            found: json_kind(&raw),
        });
    }
    let parsed: VerificationJsonResponse = serde_json::from_value(raw.clone())?;

    Ok(Verification {
        sid: parsed.sid,
        service_sid: parsed.service_sid,
        account_sid: parsed.account_sid,
        to: parsed.to,
        channel: parsed.channel,
        status: decode_status(parsed.status),
        valid: decode_valid(parsed.valid),
        sna: decode_sna_payload(parsed.sna),
        url: parsed.url,
        date_created: parsed.date_created,
        date_updated: parsed.date_updated,
        raw,
    })
}
