use super::{MxLookup, PersonalDomains, extract_domain, is_valid_email_format};
use serde::Serialize;

pub const INVALID_MESSAGE: &str = "Please enter a valid email address";
pub const PERSONAL_MESSAGE: &str = "Check your email address. Work email is preferred.";
pub const ACCEPTED_MESSAGE: &str = "Email address accepted";

pub const INVALID_FORMAT_REASON: &str = "Invalid email format";
pub const DELIVERABLE_REASON: &str = "Valid email domain with MX records";
pub const UNDELIVERABLE_REASON: &str = "Domain has no MX records or does not exist";

/// Visual weight of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

/// Form-side classification of a candidate address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Empty, whitespace-only, or not shaped like `local@domain.tld`.
    Invalid,
    /// Well formed, but hosted by a consumer provider.
    Personal,
    Accepted,
}

impl Verdict {
    pub fn severity(self) -> Severity {
        match self {
            Verdict::Invalid => Severity::Error,
            Verdict::Personal => Severity::Warning,
            Verdict::Accepted => Severity::Success,
        }
    }

    /// Default user-facing text for this verdict.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Invalid => INVALID_MESSAGE,
            Verdict::Personal => PERSONAL_MESSAGE,
            Verdict::Accepted => ACCEPTED_MESSAGE,
        }
    }
}

/// Classifies a candidate for the form field.
///
/// Pure: no I/O, and the same input always yields the same verdict. The
/// candidate is trimmed first; the domain comparison ignores case.
///
/// # Examples
/// ```
/// use form_email_validator::validation::{PersonalDomains, Verdict, classify};
///
/// let personal = PersonalDomains::default();
/// assert_eq!(classify("jane@acme.com", &personal), Verdict::Accepted);
/// assert_eq!(classify("JANE@GMAIL.COM", &personal), Verdict::Personal);
/// assert_eq!(classify("not-an-email", &personal), Verdict::Invalid);
/// ```
pub fn classify(candidate: &str, personal: &PersonalDomains) -> Verdict {
    let candidate = candidate.trim();
    if candidate.is_empty() || !is_valid_email_format(candidate) {
        return Verdict::Invalid;
    }

    match extract_domain(candidate) {
        Some(domain) if personal.contains(&domain) => Verdict::Personal,
        Some(_) => Verdict::Accepted,
        None => Verdict::Invalid,
    }
}

/// Server-side verdict: format check followed by one MX lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerVerdict {
    InvalidFormat,
    Undeliverable { domain: String },
    Deliverable { domain: String },
}

impl ServerVerdict {
    /// True only when MX records were found. This is a heuristic: catch-all
    /// domains and greylisting servers are indistinguishable from real
    /// mailboxes here.
    pub fn is_valid(&self) -> bool {
        matches!(self, ServerVerdict::Deliverable { .. })
    }

    pub fn has_mx_records(&self) -> bool {
        self.is_valid()
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            ServerVerdict::InvalidFormat => None,
            ServerVerdict::Undeliverable { domain } | ServerVerdict::Deliverable { domain } => {
                Some(domain)
            }
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ServerVerdict::InvalidFormat => INVALID_FORMAT_REASON,
            ServerVerdict::Undeliverable { .. } => UNDELIVERABLE_REASON,
            ServerVerdict::Deliverable { .. } => DELIVERABLE_REASON,
        }
    }
}

/// Checks the format of `candidate` and, if it passes, whether its domain
/// has MX records.
///
/// Malformed input short-circuits without touching DNS. Lookup failures of
/// any kind come back as [`ServerVerdict::Undeliverable`].
pub async fn verify(candidate: &str, mx: &dyn MxLookup) -> ServerVerdict {
    let candidate = candidate.trim();
    if !is_valid_email_format(candidate) {
        return ServerVerdict::InvalidFormat;
    }
    let Some(domain) = extract_domain(candidate) else {
        return ServerVerdict::InvalidFormat;
    };

    if mx.has_mx_records(&domain).await {
        ServerVerdict::Deliverable { domain }
    } else {
        ServerVerdict::Undeliverable { domain }
    }
}
