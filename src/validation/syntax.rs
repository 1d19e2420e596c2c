use regex::Regex;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Checks that a candidate has the shape `local@domain.tld`.
///
/// The check is shallow: one or more non-space, non-`@`
/// characters on each side of a single `@`, and at least one dot in the
/// domain part. It does not attempt RFC 5322 conformance.
///
/// # Examples
/// ```
/// use form_email_validator::validation::syntax::is_valid_email_format;
///
/// assert!(is_valid_email_format("jane@acme.com"));
/// assert!(!is_valid_email_format("jane@localhost"));
/// assert!(!is_valid_email_format("jane doe@acme.com"));
/// ```
pub fn is_valid_email_format(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email_format("simple@example.com"));
        assert!(is_valid_email_format("very.common@example.com"));
        assert!(is_valid_email_format("x@a.io"));
        assert!(is_valid_email_format("test+tag@example.co.uk"));
    }

    #[test]
    fn accepts_unusual_but_shaped_addresses() {
        // The pattern only cares about shape, not character classes.
        assert!(is_valid_email_format("!#$%@ex_mple.com"));
        assert!(is_valid_email_format("Pelé@exämple.中国"));
        assert!(is_valid_email_format("USER@GMAIL.COM"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email_format(""));
        assert!(!is_valid_email_format("not-an-email"));
        assert!(!is_valid_email_format("missing@"));
        assert!(!is_valid_email_format("@missing.com"));
        assert!(!is_valid_email_format("@"));
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(!is_valid_email_format("user@localhost"));
        assert!(!is_valid_email_format("user@example."));
    }

    #[test]
    fn rejects_more_than_one_at() {
        assert!(!is_valid_email_format("a@b@example.com"));
        assert!(!is_valid_email_format("a@@example.com"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!is_valid_email_format("   "));
        assert!(!is_valid_email_format(" user@example.com"));
        assert!(!is_valid_email_format("user@example.com "));
        assert!(!is_valid_email_format("us er@example.com"));
        assert!(!is_valid_email_format("user@exa\tmple.com"));
        // Non-breaking space is whitespace too.
        assert!(!is_valid_email_format("user\u{a0}x@example.com"));
    }
}
