//! # Field validation
//!
//! Free-standing helpers shared by every entity mutator. Each helper
//! sanitizes first, then enforces the field's shape, and returns the
//! canonical value to store.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, Result};

/// ASCII-only address with a required TLD. Catches the common malformed
/// cases; anything stricter belongs to a mail-delivery layer.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9._%+-]*[a-zA-Z0-9])?@[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?\.[a-zA-Z]{2,}$",
    )
    .expect("email pattern is valid")
});

/// Trims surrounding whitespace and strips control characters.
pub fn sanitize(raw: &str) -> String {
    raw.trim().chars().filter(|c| !c.is_control()).collect()
}

/// Validates a mandatory text field: non-empty after sanitization and within
/// `max` characters.
pub fn required_text(field: &str, raw: &str, max: usize) -> Result<String> {
    let clean = sanitize(raw);
    if clean.is_empty() {
        return Err(AppError::Validation(format!("{field} is empty or insecure")));
    }
    if clean.chars().count() > max {
        return Err(AppError::Validation(format!("{field} is too large")));
    }
    Ok(clean)
}

/// Validates an optional text field. Absent input, or input that sanitizes
/// down to nothing, is stored as `None`.
pub fn optional_text(field: &str, raw: Option<&str>, max: usize) -> Result<Option<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let clean = sanitize(raw);
    if clean.is_empty() {
        return Ok(None);
    }
    if clean.chars().count() > max {
        return Err(AppError::Validation(format!("{field} is too large")));
    }
    Ok(Some(clean))
}

/// Validates a fixed-length hexadecimal secret (hash, salt, token) and
/// canonicalizes it to lowercase.
pub fn exact_hex(field: &str, raw: &str, len: usize) -> Result<String> {
    let clean = sanitize(raw);
    if clean.is_empty() {
        return Err(AppError::Validation(format!("{field} is empty or insecure")));
    }
    if !clean.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::Validation(format!("{field} contains invalid characters")));
    }
    if clean.chars().count() != len {
        return Err(AppError::Validation(format!("{field} must be {len} characters")));
    }
    Ok(clean.to_lowercase())
}

/// Validates an email address: mandatory, bounded, and syntactically valid.
pub fn email(field: &str, raw: &str, max: usize) -> Result<String> {
    let clean = required_text(field, raw, max)?;
    if !EMAIL_RE.is_match(&clean) {
        return Err(AppError::Validation(format!("{field} is not a valid email address")));
    }
    Ok(clean)
}
