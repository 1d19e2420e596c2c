use super::FieldStyle;
use log::{error, info};

/// The bits of a page the field binding needs to inspect.
pub trait FieldHost {
    fn has_element(&self, id: &str) -> bool;
}

/// Attributes of the message element created next to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRegion {
    pub id: String,
    pub classes: Vec<String>,
    pub role: &'static str,
    pub aria_live: &'static str,
}

impl MessageRegion {
    pub fn new(id: impl Into<String>, style: &FieldStyle) -> Self {
        let mut classes: Vec<String> = ["hidden", "opacity-0", "text-sm", "mt-2"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        classes.extend(style.transition_class.split_whitespace().map(str::to_string));
        Self {
            id: id.into(),
            classes,
            role: "alert",
            aria_live: "polite",
        }
    }
}

/// What to attach to the email input when validation is initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub input_id: String,
    /// Present when the page has no message element yet and one must be
    /// inserted directly after the input.
    pub create_region: Option<MessageRegion>,
    pub aria_describedby: String,
    pub input_classes: Vec<String>,
}

/// Prepares the blur binding for the page.
///
/// Returns `None`, after logging, when the email input is missing; the
/// caller then skips validation entirely rather than failing.
pub fn init_validation(host: &impl FieldHost, style: &FieldStyle) -> Option<FieldBinding> {
    let input_id = id_from_selector(&style.selectors.email_input);
    if !host.has_element(input_id) {
        error!("Email input field not found");
        return None;
    }

    let region_id = id_from_selector(&style.selectors.message_container);
    let create_region =
        (!host.has_element(region_id)).then(|| MessageRegion::new(region_id, style));

    info!("Email validation initialized for #{input_id}");
    Some(FieldBinding {
        input_id: input_id.to_string(),
        create_region,
        aria_describedby: region_id.to_string(),
        input_classes: style
            .transition_class
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    })
}

fn id_from_selector(selector: &str) -> &str {
    selector.strip_prefix('#').unwrap_or(selector)
}
