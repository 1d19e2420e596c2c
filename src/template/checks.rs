use regex::Regex;

/// One assertion about the template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// The source is not zero-length.
    NonEmpty,
    /// The fragment occurs somewhere.
    Contains(&'static str),
    /// The trimmed source starts with the prefix.
    StartsWith(&'static str),
    /// The opening tag that carries `id="<id>"` also contains `attribute`
    /// somewhere after the id.
    ElementHas {
        id: &'static str,
        attribute: &'static str,
    },
    /// Every fragment occurs.
    ContainsAll(&'static [&'static str]),
    /// No match for the regular expression.
    NotMatching(&'static str),
}

impl Check {
    pub fn evaluate(&self, html: &str) -> Result<bool, regex::Error> {
        Ok(match self {
            Check::NonEmpty => !html.is_empty(),
            Check::Contains(fragment) => html.contains(fragment),
            Check::StartsWith(prefix) => html.trim().starts_with(prefix),
            Check::ElementHas { id, attribute } => {
                let tag = Regex::new(&format!(r#"id="{}"[^>]*>"#, regex::escape(id)))?;
                tag.find(html)
                    .is_some_and(|m| m.as_str().contains(attribute))
            }
            Check::ContainsAll(fragments) => fragments.iter().all(|f| html.contains(f)),
            Check::NotMatching(pattern) => !Regex::new(pattern)?.is_match(html),
        })
    }
}

/// A named check with the text reported when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCheck {
    pub name: &'static str,
    pub check: Check,
    pub failure: &'static str,
}

impl TemplateCheck {
    pub const fn new(name: &'static str, check: Check, failure: &'static str) -> Self {
        Self {
            name,
            check,
            failure,
        }
    }
}

/// The checks the contact form template must satisfy.
pub fn default_checks() -> Vec<TemplateCheck> {
    use Check::*;

    vec![
        // Document structure
        TemplateCheck::new(
            "HTML file exists and is readable",
            NonEmpty,
            "HTML file is empty",
        ),
        TemplateCheck::new(
            "HTML5 doctype is present",
            StartsWith("<!DOCTYPE html>"),
            "HTML5 doctype not found",
        ),
        TemplateCheck::new(
            "UTF-8 charset is declared",
            Contains(r#"charset="UTF-8""#),
            "UTF-8 charset not declared",
        ),
        TemplateCheck::new(
            "Viewport meta tag is present",
            Contains(r#"name="viewport""#),
            "Viewport meta tag not found",
        ),
        TemplateCheck::new(
            "Page title is present",
            Contains("<title>"),
            "Title tag not found",
        ),
        // Dynamics 365 requirements
        TemplateCheck::new(
            "Dynamics 365 meta tags are present",
            Contains("marketing-designer-content-editor-document"),
            "Dynamics 365 content editor meta tag not found",
        ),
        TemplateCheck::new(
            "Marketing form class is present",
            Contains(r#"class="marketingForm""#),
            "Marketing form class not found",
        ),
        // Form fields
        TemplateCheck::new(
            "First name field exists",
            Contains(r#"id="firstname""#),
            "First name field not found",
        ),
        TemplateCheck::new(
            "First name field is required",
            ElementHas {
                id: "firstname",
                attribute: "required",
            },
            "First name field is not marked as required",
        ),
        TemplateCheck::new(
            "Last name field exists",
            Contains(r#"id="lastname""#),
            "Last name field not found",
        ),
        TemplateCheck::new(
            "Last name field is required",
            ElementHas {
                id: "lastname",
                attribute: "required",
            },
            "Last name field is not marked as required",
        ),
        TemplateCheck::new(
            "Email field exists",
            Contains(r#"id="emailaddress1""#),
            "Email field not found",
        ),
        TemplateCheck::new(
            "Email field is required",
            ElementHas {
                id: "emailaddress1",
                attribute: "required",
            },
            "Email field is not marked as required",
        ),
        TemplateCheck::new(
            r#"Email field has type="email""#,
            ElementHas {
                id: "emailaddress1",
                attribute: r#"type="email""#,
            },
            r#"Email field does not have type="email""#,
        ),
        TemplateCheck::new(
            "Description field exists",
            Contains(r#"id="description""#),
            "Description field not found",
        ),
        TemplateCheck::new(
            "Description field is required",
            ElementHas {
                id: "description",
                attribute: "required",
            },
            "Description field is not marked as required",
        ),
        // Validation
        TemplateCheck::new(
            "Validation message containers exist",
            Contains("validation-message"),
            "Validation message containers not found",
        ),
        TemplateCheck::new(
            "Custom validation messages are configured",
            Contains("VALIDATION_CONFIG"),
            "Validation configuration not found",
        ),
        TemplateCheck::new(
            "Email validation function exists",
            Contains("validateEmailField"),
            "Email validation function not found",
        ),
        TemplateCheck::new(
            "Form initialization function exists",
            Contains("initFormValidation"),
            "Form initialization function not found",
        ),
        TemplateCheck::new(
            "HTML5 default validation is disabled (novalidate)",
            Contains("form.setAttribute('novalidate'"),
            "Form does not disable HTML5 validation",
        ),
        TemplateCheck::new(
            "Custom title attributes for validation messages",
            Contains("title="),
            "Custom title attributes for validation not found",
        ),
        // Styling and UI
        TemplateCheck::new(
            "Tailwind CSS CDN is included",
            Contains("tailwindcss.com"),
            "Tailwind CSS CDN not found",
        ),
        TemplateCheck::new(
            "Thank you modal exists",
            Contains(r#"id="thankYouModal""#),
            "Thank you modal not found",
        ),
        TemplateCheck::new(
            "Close modal function exists",
            Contains("closeThankYouModal"),
            "Close modal function not found",
        ),
        TemplateCheck::new(
            "Form styling classes are present",
            Contains("rounded-lg"),
            "Tailwind styling classes not found",
        ),
        // Accessibility
        TemplateCheck::new(
            "All form inputs have labels",
            ContainsAll(&[
                r#"for="firstname""#,
                r#"for="lastname""#,
                r#"for="emailaddress1""#,
                r#"for="description""#,
            ]),
            "Not all inputs have associated labels",
        ),
        TemplateCheck::new(
            "Form blocks have Dynamics 365 attributes",
            Contains("data-editorblocktype"),
            "Dynamics 365 form block attributes not found",
        ),
        // Code quality
        TemplateCheck::new(
            "No external JavaScript files (all inline)",
            NotMatching(r"<script[^>]*src=[^>]*\.js"),
            "External JavaScript file reference found (should be inline)",
        ),
        TemplateCheck::new(
            "JavaScript is properly commented",
            Contains("CONFIGURATION"),
            "JavaScript configuration section not found or not commented",
        ),
        TemplateCheck::new(
            "Validation configuration is customizable",
            Contains("messages:"),
            "Customizable validation messages not found",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_and_starts_with() {
        let html = "  <!DOCTYPE html><title>x</title>";
        assert!(Check::StartsWith("<!DOCTYPE html>").evaluate(html).unwrap());
        assert!(Check::Contains("<title>").evaluate(html).unwrap());
        assert!(!Check::Contains("<body>").evaluate(html).unwrap());
        assert!(Check::NonEmpty.evaluate(html).unwrap());
        assert!(!Check::NonEmpty.evaluate("").unwrap());
        assert!(Check::NonEmpty.evaluate(" \n ").unwrap());
    }

    #[test]
    fn element_has_looks_only_at_the_tag_with_the_id() {
        let html = r#"<input id="firstname" type="text" required><input id="lastname" type="text">"#;
        let required = |id| Check::ElementHas {
            id,
            attribute: "required",
        };
        assert!(required("firstname").evaluate(html).unwrap());
        assert!(!required("lastname").evaluate(html).unwrap());
        assert!(!required("missing").evaluate(html).unwrap());
    }

    #[test]
    fn element_has_needs_attribute_after_id() {
        // Matches the suite's behaviour: only text after `id=` is inspected.
        let html = r#"<input required id="firstname" type="text">"#;
        let check = Check::ElementHas {
            id: "firstname",
            attribute: "required",
        };
        assert!(!check.evaluate(html).unwrap());
    }

    #[test]
    fn element_id_is_escaped() {
        let html = r#"<input id="a.b" required>"#;
        let check = Check::ElementHas {
            id: "a.b",
            attribute: "required",
        };
        assert!(check.evaluate(html).unwrap());
        assert!(
            !Check::ElementHas {
                id: "a.b",
                attribute: "required"
            }
            .evaluate(r#"<input id="axb" required>"#)
            .unwrap()
        );
    }

    #[test]
    fn not_matching_flags_external_scripts() {
        let check = Check::NotMatching(r"<script[^>]*src=[^>]*\.js");
        assert!(check.evaluate(r#"<script src="https://cdn.tailwindcss.com"></script>"#).unwrap());
        assert!(!check.evaluate(r#"<script src="/static/app.js"></script>"#).unwrap());
    }

    #[test]
    fn bad_pattern_is_an_error() {
        assert!(Check::NotMatching("(").evaluate("").is_err());
    }

    #[test]
    fn default_suite_has_unique_names() {
        let checks = default_checks();
        assert_eq!(checks.len(), 31);
        let mut names: Vec<_> = checks.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), checks.len());
    }
}
