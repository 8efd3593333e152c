use crate::domain::value::{Channel, PhoneNumber, VerificationSid};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request for `POST Services/{ServiceSid}/Verifications`.
pub struct StartVerification {
    to: PhoneNumber,
    channel: Channel,
}

impl StartVerification {
    /// Start a verification on an arbitrary channel.
    pub fn new(to: PhoneNumber, channel: Channel) -> Self {
        Self { to, channel }
    }

    /// Start a Silent Network Authentication verification.
    pub fn sna(to: PhoneNumber) -> Self {
        Self::new(to, Channel::Sna)
    }

    pub fn to(&self) -> &PhoneNumber {
        &self.to
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How a verification check identifies the verification it targets.
pub enum CheckTarget {
    /// The pending verification for this phone number (`To`).
    PhoneNumber(PhoneNumber),
    /// A specific verification (`VerificationSid`).
    VerificationSid(VerificationSid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request for `POST Services/{ServiceSid}/VerificationCheck`.
///
/// SNA checks carry no code; the API looks the verification up and reports its state.
pub struct CheckVerification {
    target: CheckTarget,
}

impl CheckVerification {
    /// Check the pending verification for a phone number.
    pub fn for_phone(to: PhoneNumber) -> Self {
        Self {
            target: CheckTarget::PhoneNumber(to),
        }
    }

    /// Check a verification by its SID.
    pub fn for_sid(sid: VerificationSid) -> Self {
        Self {
            target: CheckTarget::VerificationSid(sid),
        }
    }

    pub fn target(&self) -> &CheckTarget {
        &self.target
    }
}
