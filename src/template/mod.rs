//! Fragment checks for the static contact form template.
//!
//! The template is plain HTML with inline script, edited by hand and pasted
//! into Dynamics 365. These checks catch the edits that would silently break
//! it: a dropped `required`, a renamed function, an external script.

pub mod checks;

pub use checks::{Check, TemplateCheck, default_checks};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TEMPLATE_PATH: &str = "templates/contact-form.html";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn load_template(path: impl AsRef<Path>) -> Result<String, TemplateError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    /// `None` on success, otherwise the failure text.
    pub failure: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Runs every check against `html`, in order. A check whose pattern does not
/// compile counts as failed.
pub fn run_checks(html: &str, checks: &[TemplateCheck]) -> CheckReport {
    let outcomes = checks
        .iter()
        .map(|tc| {
            let failure = match tc.check.evaluate(html) {
                Ok(true) => None,
                Ok(false) => Some(tc.failure.to_string()),
                Err(e) => Some(format!("invalid check pattern: {e}")),
            };
            CheckOutcome {
                name: tc.name,
                failure,
            }
        })
        .collect();
    CheckReport { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let checks = [
            TemplateCheck::new("has title", Check::Contains("<title>"), "Title tag not found"),
            TemplateCheck::new("has body", Check::Contains("<body>"), "Body tag not found"),
            TemplateCheck::new("broken", Check::NotMatching("("), "unused"),
        ];
        let report = run_checks("<title>x</title>", &checks);

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
        assert!(!report.is_success());

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures[0].failure.as_deref(), Some("Body tag not found"));
        assert!(
            failures[1]
                .failure
                .as_deref()
                .unwrap()
                .starts_with("invalid check pattern")
        );
    }

    #[test]
    fn empty_suite_succeeds() {
        let report = run_checks("", &[]);
        assert!(report.is_success());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = load_template("does/not/exist.html").unwrap_err();
        assert!(err.to_string().starts_with("could not read does/not/exist.html"));
    }

    #[test]
    fn blank_template_fails_most_checks() {
        let report = run_checks("", &default_checks());
        assert!(!report.is_success());
        // Only the "no external scripts" check holds for an empty document.
        assert_eq!(report.passed(), 1);
    }
}
