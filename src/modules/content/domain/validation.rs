use regex::Regex;
use std::sync::OnceLock;

/// A field-local validation failure. The message key resolves
/// through the i18n dictionaries at the response boundary, so the
/// domain stays language-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message_key: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message_key: &'static str) -> Self {
        Self { field, message_key }
    }
}

/// Push a `validation.required` error when the value is blank.
/// Returns the trimmed value for reuse.
pub fn require<'a>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &'a str,
) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "validation.required"));
    }
    trimmed
}

/// URL fields, when non-empty, must use the secure scheme prefix.
pub fn require_https(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !trimmed.starts_with("https://") {
        errors.push(FieldError::new(field, "validation.url_https"));
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Same basic address pattern the original form used.
    RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"))
}

pub fn is_basic_email(value: &str) -> bool {
    email_regex().is_match(value)
}
