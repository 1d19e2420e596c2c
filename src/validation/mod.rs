/// Classification of candidate addresses into form verdicts and, with an
/// MX lookup, into server verdicts.
pub mod classifier;

/// Async MX-record presence check over trust-dns, behind the [`MxLookup`] trait.
pub mod dnsmx;

pub mod domain;

/// The fixed table of consumer email providers.
pub mod personal;

/// Shape check: `local@domain.tld` with no whitespace and a single `@`.
///
/// # Examples
/// ```
/// use form_email_validator::validation::syntax::is_valid_email_format;
///
/// assert!(is_valid_email_format("user.name+tag@example.com"));
/// assert!(!is_valid_email_format("user@example"));
/// ```
pub mod syntax;

pub use classifier::{ServerVerdict, Severity, Verdict, classify, verify};
pub use dnsmx::{DnsMxLookup, DnsSettings, MxLookup};
pub use domain::extract_domain;
pub use personal::PersonalDomains;
pub use syntax::is_valid_email_format;
