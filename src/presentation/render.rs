use super::FieldStyle;
use crate::validation::{PersonalDomains, Verdict, classify};
use serde::Serialize;

/// Classes on the message element while it is shown.
pub const VISIBLE_CLASSES: [&str; 1] = ["opacity-100"];
/// Classes on the message element while it is hidden.
pub const HIDDEN_CLASSES: [&str; 2] = ["hidden", "opacity-0"];

/// The message shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub icon: String,
    pub text: String,
    pub class: String,
    /// Inner HTML of the message element. The text is escaped.
    pub html: String,
}

/// Complete visual state of the email field after one update.
///
/// Border, message and ARIA flag are produced together so callers apply
/// them in one step and never show a new border with a stale message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRendering {
    pub border_class: String,
    pub message: Option<MessageView>,
    pub aria_invalid: bool,
}

impl FieldRendering {
    /// True for the cleared-field state.
    pub fn is_neutral(&self) -> bool {
        self.message.is_none() && !self.aria_invalid
    }

    /// Value for the input's `aria-invalid` attribute.
    pub fn aria_invalid_attr(&self) -> &'static str {
        if self.aria_invalid { "true" } else { "false" }
    }

    /// Visibility classes for the message element.
    pub fn message_visibility(&self) -> &'static [&'static str] {
        if self.message.is_some() {
            &VISIBLE_CLASSES
        } else {
            &HIDDEN_CLASSES
        }
    }
}

/// Maps a verdict to visuals; `None` resets the field to neutral.
///
/// # Examples
/// ```
/// use form_email_validator::presentation::{FieldStyle, render};
/// use form_email_validator::validation::Verdict;
///
/// let style = FieldStyle::default();
/// let rendering = render(Some(Verdict::Invalid), &style);
/// assert_eq!(rendering.border_class, "border-red-500");
/// assert_eq!(rendering.aria_invalid_attr(), "true");
///
/// assert!(render(None, &style).is_neutral());
/// ```
pub fn render(verdict: Option<Verdict>, style: &FieldStyle) -> FieldRendering {
    let Some(verdict) = verdict else {
        return FieldRendering {
            border_class: style.border_class(None).to_string(),
            message: None,
            aria_invalid: false,
        };
    };

    let severity = verdict.severity();
    let icon = style.icon(severity);
    let text = style.message(verdict);
    FieldRendering {
        border_class: style.border_class(Some(severity)).to_string(),
        message: Some(MessageView {
            icon: icon.to_string(),
            text: text.to_string(),
            class: style.message_class(severity).to_string(),
            html: format!(
                r#"<span class="inline-flex items-center gap-2"><span>{}</span><span>{}</span></span>"#,
                escape_html(icon),
                escape_html(text)
            ),
        }),
        aria_invalid: verdict == Verdict::Invalid,
    }
}

/// Blur handler: trims the field value, clears the field when it is empty,
/// otherwise classifies and renders.
pub fn on_blur(value: &str, personal: &PersonalDomains, style: &FieldStyle) -> FieldRendering {
    let value = value.trim();
    if value.is_empty() {
        return render(None, style);
    }
    render(Some(classify(value, personal)), style)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> FieldStyle {
        FieldStyle::default()
    }

    #[test]
    fn invalid_renders_error_state() {
        let rendering = render(Some(Verdict::Invalid), &style());
        assert_eq!(rendering.border_class, "border-red-500");
        assert!(rendering.aria_invalid);

        let message = rendering.message.as_ref().unwrap();
        assert_eq!(message.icon, "❌");
        assert_eq!(message.class, "text-red-600");
        assert_eq!(message.text, "Please enter a valid email address");
        assert_eq!(rendering.message_visibility(), &["opacity-100"]);
    }

    #[test]
    fn personal_renders_warning_without_aria_invalid() {
        let rendering = render(Some(Verdict::Personal), &style());
        assert_eq!(rendering.border_class, "border-orange-500");
        assert_eq!(rendering.aria_invalid_attr(), "false");
        let message = rendering.message.unwrap();
        assert_eq!(message.icon, "⚠");
        assert_eq!(message.class, "text-orange-600");
    }

    #[test]
    fn accepted_renders_success_html() {
        let rendering = render(Some(Verdict::Accepted), &style());
        assert_eq!(rendering.border_class, "border-green-500");
        assert_eq!(
            rendering.message.unwrap().html,
            r#"<span class="inline-flex items-center gap-2"><span>✓</span><span>Email address accepted</span></span>"#
        );
    }

    #[test]
    fn cleared_field_is_neutral() {
        let rendering = render(None, &style());
        assert!(rendering.is_neutral());
        assert_eq!(rendering.border_class, "border-gray-300");
        assert_eq!(rendering.aria_invalid_attr(), "false");
        assert_eq!(rendering.message_visibility(), &["hidden", "opacity-0"]);
    }

    #[test]
    fn blur_on_blank_value_clears_instead_of_erroring() {
        let personal = PersonalDomains::default();
        assert!(on_blur("", &personal, &style()).is_neutral());
        assert!(on_blur("   ", &personal, &style()).is_neutral());
    }

    #[test]
    fn blur_classifies_trimmed_value() {
        let personal = PersonalDomains::default();
        let style = style();
        assert_eq!(
            on_blur(" jane@gmail.com ", &personal, &style),
            render(Some(Verdict::Personal), &style)
        );
        assert_eq!(
            on_blur("jane@acme.com", &personal, &style),
            render(Some(Verdict::Accepted), &style)
        );
        assert!(on_blur("not-an-email", &personal, &style).aria_invalid);
    }

    #[test]
    fn custom_message_is_escaped() {
        let mut style = style();
        style.messages.personal = "Use <b>work</b> email & \"thanks\"".to_string();

        let message = render(Some(Verdict::Personal), &style).message.unwrap();
        assert_eq!(message.text, "Use <b>work</b> email & \"thanks\"");
        assert!(
            message
                .html
                .contains("Use &lt;b&gt;work&lt;/b&gt; email &amp; &quot;thanks&quot;")
        );
    }
}
