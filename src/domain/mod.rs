//! Domain layer: strong types with validation and invariants (no I/O).

mod region;
mod request;
mod response;
mod validation;
mod value;

pub use region::{DEFAULT_REGION, Edge, RegionAliases, RegionCode, Routing};
pub use request::{CheckTarget, CheckVerification, StartVerification};
pub use response::{
    Field, JsonKind, SnaAttemptError, SnaAttemptErrors, SnaPayload, Verification,
    VerificationCheck,
};
pub use validation::ValidationError;
pub use value::{
    AccountSid, ApiErrorCode, ApiKeySecret, ApiKeySid, AuthToken, Channel, KnownApiErrorCode,
    PhoneNumber, ServiceSid, SnaErrorCode, VerificationSid, VerificationStatus,
    mask_phone_number,
};
