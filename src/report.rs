//! Console report: per-operation summaries and their human-readable rendering.
//!
//! Summaries are derived purely from the typed responses; rendering writes them, preceded
//! by the raw JSON body, to any [`Write`] sink.

use std::io::{self, Write};

use crate::domain::{
    Field, JsonKind, PhoneNumber, Routing, SnaAttemptErrors, Verification, VerificationCheck,
    VerificationStatus,
};

/// Where the API documents SNA attempt error codes.
pub const SNA_ERROR_CODES_URL: &str =
    "https://www.twilio.com/docs/verify/api/verification#sna-error-codes";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("could not serialize response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the start response says about the SNA confirmation URL.
pub enum SnaUrlOutcome {
    Found(String),
    /// `sna` is an object without a string `url`.
    MissingUrl,
    /// `sna` is present but not an object.
    Malformed { found: JsonKind },
    /// `sna` is missing or `null`.
    NoPayload,
}

impl SnaUrlOutcome {
    pub fn from_verification(verification: &Verification) -> Self {
        match &verification.sna {
            Field::Present(payload) => match &payload.url {
                Some(url) => Self::Found(url.clone()),
                None => Self::MissingUrl,
            },
            Field::Malformed { found } => Self::Malformed { found: *found },
            Field::Absent => Self::NoPayload,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found(url) => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartSummary {
    pub status: Field<VerificationStatus>,
    pub sna_url: SnaUrlOutcome,
}

impl StartSummary {
    pub fn from_verification(verification: &Verification) -> Self {
        Self {
            status: verification.status.clone(),
            sna_url: SnaUrlOutcome::from_verification(verification),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the check response says about per-attempt SNA errors.
///
/// An empty list is explicit success; a missing list means the API returned no data.
pub enum AttemptErrorsOutcome {
    NoData,
    Malformed { found: JsonKind },
    Clean,
    Errors(SnaAttemptErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub status: Field<VerificationStatus>,
    pub valid: Field<bool>,
    pub attempt_errors: AttemptErrorsOutcome,
}

impl CheckSummary {
    pub fn from_check(check: &VerificationCheck) -> Self {
        let attempt_errors = match &check.sna_attempts_error_codes {
            Field::Absent => AttemptErrorsOutcome::NoData,
            Field::Malformed { found } => AttemptErrorsOutcome::Malformed { found: *found },
            Field::Present(errors) if errors.is_empty() => AttemptErrorsOutcome::Clean,
            Field::Present(errors) => AttemptErrorsOutcome::Errors(errors.clone()),
        };

        Self {
            status: check.status.clone(),
            valid: check.valid.clone(),
            attempt_errors,
        }
    }

    /// `true` when the API approved the verification.
    pub fn is_approved(&self) -> bool {
        self.status
            .present()
            .is_some_and(VerificationStatus::is_approved)
    }
}

/// Write which endpoint the client will talk to.
pub fn render_routing(out: &mut impl Write, routing: Option<&Routing>) -> io::Result<()> {
    match routing.and_then(Routing::edge) {
        Some(edge) => writeln!(out, "→ Setting edge to: {}", edge.as_str()),
        None => writeln!(out, "→ Using default US endpoint (no edge set)"),
    }
}

/// Write the banner printed before the start call.
pub fn render_start_header(
    out: &mut impl Write,
    phone: &PhoneNumber,
    region: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Starting new SNA verification ===")?;
    writeln!(out, "Phone: {phone}")?;
    writeln!(out, "Region Config: {}", region.unwrap_or(""))
}

/// Write the banner printed before the check call.
pub fn render_check_header(
    out: &mut impl Write,
    phone: &PhoneNumber,
    region: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Checking SNA verification ===")?;
    writeln!(out, "Phone number: {phone}")?;
    writeln!(out, "Region Config: {}", region.unwrap_or(""))
}

/// Write the start response and its SNA URL section.
pub fn render_start(
    out: &mut impl Write,
    verification: &Verification,
) -> Result<StartSummary, RenderError> {
    let json = serde_json::to_string_pretty(&verification.raw)?;
    writeln!(out)?;
    writeln!(out, "=== Verification Response ===")?;
    writeln!(out, "{json}")?;

    let summary = StartSummary::from_verification(verification);
    writeln!(out)?;
    match &summary.sna_url {
        SnaUrlOutcome::Found(url) => {
            writeln!(out, "=== SNA URL (use this in Step 2) ===")?;
            writeln!(out, "{url}")?;
            writeln!(out)?;
            writeln!(
                out,
                "Note: This URL is unique and can only be used once. It expires in 10 minutes."
            )?;
        }
        SnaUrlOutcome::MissingUrl => writeln!(out, "Warning: No URL found in SNA response")?,
        SnaUrlOutcome::Malformed { found } => writeln!(
            out,
            "Warning: Could not parse SNA response (expected an object, found {found})"
        )?,
        SnaUrlOutcome::NoPayload => writeln!(out, "Warning: No SNA data found in response")?,
    }

    Ok(summary)
}

/// Write the check response, its status section, and the attempt error section.
pub fn render_check(
    out: &mut impl Write,
    check: &VerificationCheck,
) -> Result<CheckSummary, RenderError> {
    let json = serde_json::to_string_pretty(&check.raw)?;
    writeln!(out, "=== Verification Check Response ===")?;
    writeln!(out, "{json}")?;

    let summary = CheckSummary::from_check(check);

    writeln!(out)?;
    writeln!(out, "=== Verification Status ===")?;
    match &summary.status {
        Field::Present(status) => {
            writeln!(out, "Status: {status}")?;
            if status.is_approved() {
                writeln!(
                    out,
                    "✅ SUCCESS: SNA successfully confirmed user possession of the mobile number!"
                )?;
            } else {
                writeln!(out, "⚠️  Verification status: {status}")?;
            }
        }
        Field::Malformed { found } => writeln!(
            out,
            "Warning: Could not parse status (expected a string, found {found})"
        )?,
        Field::Absent => {}
    }
    match &summary.valid {
        Field::Present(valid) => writeln!(out, "Valid: {valid}")?,
        Field::Malformed { found } => writeln!(
            out,
            "Warning: Could not parse valid flag (expected a boolean, found {found})"
        )?,
        Field::Absent => {}
    }

    writeln!(out)?;
    writeln!(out, "=== SNA Attempt Error Codes ===")?;
    match &summary.attempt_errors {
        AttemptErrorsOutcome::NoData => writeln!(out, "No SNA error codes in response")?,
        AttemptErrorsOutcome::Malformed { found } => writeln!(
            out,
            "Warning: Could not parse SNA error codes (expected a list, found {found})"
        )?,
        AttemptErrorsOutcome::Clean => {
            writeln!(out, "✅ No errors - SNA verification completed successfully!")?
        }
        AttemptErrorsOutcome::Errors(errors) => render_attempt_errors(out, errors)?,
    }

    writeln!(out)?;
    writeln!(out, "=== Important Notes ===")?;
    writeln!(out, "• Verifications expire after 10 minutes")?;
    writeln!(out, "• If you get a 404 error, the verification has expired")?;
    writeln!(out, "• Status 'approved' means successful verification")?;
    writeln!(out, "• Check sna_attempts_error_codes for any issues")?;

    Ok(summary)
}

fn render_attempt_errors(out: &mut impl Write, errors: &SnaAttemptErrors) -> io::Result<()> {
    writeln!(out, "⚠️  Found {} error(s):", errors.total())?;
    for (idx, entry) in errors.entries.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Error {}:", idx + 1)?;
        if let Some(attempt_sid) = &entry.attempt_sid {
            writeln!(out, "  Attempt SID: {attempt_sid}")?;
        }
        if let Some(code) = &entry.code {
            writeln!(out, "  Error Code: {code}")?;
            writeln!(
                out,
                "  Check the Error and Warning Dictionary for more information:"
            )?;
            writeln!(out, "  {SNA_ERROR_CODES_URL}")?;
        }
    }
    if errors.skipped > 0 {
        writeln!(out)?;
        writeln!(
            out,
            "Warning: {} entr{} could not be parsed and {} skipped",
            errors.skipped,
            if errors.skipped == 1 { "y" } else { "ies" },
            if errors.skipped == 1 { "was" } else { "were" },
        )?;
    }
    Ok(())
}

/// Write the hint shown when a check finds no verification.
pub fn render_not_found_hint(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "The verification was not found. It has probably expired (verifications last 10 \
         minutes); start a new one and retry."
    )
}
