//! Field validation rules
//!
//! Rules run against the trimmed value and the first failing rule wins:
//!
//! 1. required and empty: `"<Name> is required"`
//! 2. email fields must look like `local@domain.tld`
//! 3. `name` needs at least [`NAME_MIN_CHARS`] characters
//! 4. `message` needs at least [`MESSAGE_MIN_CHARS`] characters
//!
//! Trimming strips Unicode whitespace and U+FEFF, as the browser does.
//! Lengths count Unicode scalar values, not bytes: an emoji outside the BMP
//! counts once here where a UTF-16 `length` would count it twice.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Field, FieldKind};

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Outcome of validating one field. `message` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { valid: true, message: String::new() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into() }
    }
}

/// Validate a field snapshot. Pure: same input, same result.
pub fn validate(field: &Field) -> ValidationResult {
    let value = trim(&field.value);

    if field.required && value.is_empty() {
        return ValidationResult::error(format!("{} is required", capitalize(&field.name)));
    }

    match field.kind {
        FieldKind::Email if !EMAIL_PATTERN.is_match(value) => ValidationResult::error(INVALID_EMAIL),
        FieldKind::Name if value.chars().count() < NAME_MIN_CHARS => {
            ValidationResult::error(NAME_TOO_SHORT)
        }
        FieldKind::Message if value.chars().count() < MESSAGE_MIN_CHARS => {
            ValidationResult::error(MESSAGE_TOO_SHORT)
        }
        _ => ValidationResult::ok(),
    }
}

fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
