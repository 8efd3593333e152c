//! Typed Rust client for Twilio Verify Silent Network Authentication (SNA).
//!
//! The crate has a domain layer of strong types, a transport layer for wire-format
//! details, and a small client layer issuing one authenticated request per operation.
//! [`config`] and [`report`] back the `start_verification` and `check_verification`
//! binaries.
//!
//! ```rust,no_run
//! use sna_verify::{Auth, PhoneNumber, ServiceSid, StartVerification, VerifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VerifyClient::new(Auth::account("AC0123456789", "auth-token")?)?;
//!     let service = ServiceSid::new("VA0123456789")?;
//!     let request = StartVerification::sna(PhoneNumber::parse("+14155550100")?);
//!     let verification = client.start_verification(&service, request).await?;
//!     println!("{:?}", verification.sna);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod report;
mod transport;

pub use client::{Auth, VerifyClient, VerifyClientBuilder, VerifyError};
pub use config::{Config, ConfigError};
pub use domain::{
    AccountSid, AuthToken, Channel, CheckVerification, Field, PhoneNumber, RegionAliases,
    Routing, ServiceSid, SnaAttemptError, SnaAttemptErrors, SnaErrorCode, SnaPayload,
    StartVerification, ValidationError, Verification, VerificationCheck, VerificationSid,
    VerificationStatus,
};
