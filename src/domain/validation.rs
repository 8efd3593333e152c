use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    MissingCountryCode { input: String },
    InvalidSid { field: &'static str, input: String },
    InvalidHostLabel { field: &'static str, input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::MissingCountryCode { input } => {
                write!(
                    f,
                    "phone number must be in E.164 format (starting with '+'): {input}"
                )
            }
            Self::InvalidSid { field, input } => {
                write!(f, "{field} contains invalid characters: {input}")
            }
            Self::InvalidHostLabel { field, input } => {
                write!(f, "{field} is not a valid host label: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
