//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod error;
mod shape;
mod verification;
mod verification_check;

use crate::domain::JsonKind;

pub use error::decode_api_error_body;
pub use verification::{decode_verification_json_response, encode_start_verification_form};
pub use verification_check::{
    decode_verification_check_json_response, encode_check_verification_form,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {}", .found.map_or("null", JsonKind::as_str))]
    NotAnObject { found: Option<JsonKind> },
}
