use crate::validation::classifier::{ACCEPTED_MESSAGE, INVALID_MESSAGE, PERSONAL_MESSAGE};
use crate::validation::{Severity, Verdict};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub invalid: String,
    pub personal: String,
    pub valid: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid: INVALID_MESSAGE.to_string(),
            personal: PERSONAL_MESSAGE.to_string(),
            valid: ACCEPTED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            error: "❌".to_string(),
            warning: "⚠".to_string(),
            success: "✓".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderClasses {
    pub error: String,
    pub warning: String,
    pub success: String,
    pub default: String,
}

impl Default for BorderClasses {
    fn default() -> Self {
        Self {
            error: "border-red-500".to_string(),
            warning: "border-orange-500".to_string(),
            success: "border-green-500".to_string(),
            default: "border-gray-300".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageClasses {
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Default for MessageClasses {
    fn default() -> Self {
        Self {
            error: "text-red-600".to_string(),
            warning: "text-orange-600".to_string(),
            success: "text-green-600".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub email_input: String,
    pub message_container: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            email_input: "#emailaddress1".to_string(),
            message_container: "#emailaddress1-message".to_string(),
        }
    }
}

/// Everything the form needs to turn a verdict into visuals.
///
/// Deserialises from the same camelCase shape the form template embeds, and
/// any omitted key keeps its default, so an override can be as small as
/// `{"messages": {"personal": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldStyle {
    pub messages: Messages,
    pub icons: Icons,
    pub border_colors: BorderClasses,
    pub message_colors: MessageClasses,
    pub transition_class: String,
    pub selectors: Selectors,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            icons: Icons::default(),
            border_colors: BorderClasses::default(),
            message_colors: MessageClasses::default(),
            transition_class: "transition-all duration-300 ease-in-out".to_string(),
            selectors: Selectors::default(),
        }
    }
}

impl FieldStyle {
    pub fn message(&self, verdict: Verdict) -> &str {
        match verdict {
            Verdict::Invalid => &self.messages.invalid,
            Verdict::Personal => &self.messages.personal,
            Verdict::Accepted => &self.messages.valid,
        }
    }

    pub fn icon(&self, severity: Severity) -> &str {
        match severity {
            Severity::Error => &self.icons.error,
            Severity::Warning => &self.icons.warning,
            Severity::Success => &self.icons.success,
        }
    }

    /// `None` is the cleared field.
    pub fn border_class(&self, severity: Option<Severity>) -> &str {
        match severity {
            Some(Severity::Error) => &self.border_colors.error,
            Some(Severity::Warning) => &self.border_colors.warning,
            Some(Severity::Success) => &self.border_colors.success,
            None => &self.border_colors.default,
        }
    }

    pub fn message_class(&self, severity: Severity) -> &str {
        match severity {
            Severity::Error => &self.message_colors.error,
            Severity::Warning => &self.message_colors.warning,
            Severity::Success => &self.message_colors.success,
        }
    }

    /// Every border class this style can apply, for removal before a new one
    /// is added.
    pub fn all_border_classes(&self) -> [&str; 4] {
        [
            self.border_colors.error.as_str(),
            self.border_colors.warning.as_str(),
            self.border_colors.success.as_str(),
            self.border_colors.default.as_str(),
        ]
    }

    pub fn all_message_classes(&self) -> [&str; 3] {
        [
            self.message_colors.error.as_str(),
            self.message_colors.warning.as_str(),
            self.message_colors.success.as_str(),
        ]
    }
}
