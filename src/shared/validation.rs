//! Field-keyed validation errors and the small set of field checks shared by
//! the command constructors.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const REQUIRED: &str = "This field is required.";

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.@+-]+$").expect("hardcoded username regex is invalid")
});

static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("hardcoded slug regex is invalid"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,16}$").expect("hardcoded phone regex is invalid"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn non_field(message: impl Into<String>) -> Self {
        Self::single(NON_FIELD_ERRORS, message)
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Cross-field messages win; otherwise the first field in key order.
    pub fn first_message(&self) -> Option<&str> {
        self.0
            .get(NON_FIELD_ERRORS)
            .or_else(|| self.0.values().next())
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// Field checks
// ============================================================================

/// Trims and checks a required text field. Returns the trimmed value when valid.
pub fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    max_len: usize,
) -> Option<String> {
    let value = value.trim();

    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }

    if value.chars().count() > max_len {
        errors.add(field, max_length_message(max_len));
        return None;
    }

    Some(value.to_string())
}

/// Optional text: blank becomes `None`.
pub fn optional_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    max_len: Option<usize>,
) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;

    if let Some(max) = max_len {
        if value.chars().count() > max {
            errors.add(field, max_length_message(max));
            return None;
        }
    }

    Some(value.to_string())
}

pub fn max_length_message(max_len: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max_len)
}

pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() <= 150 && USERNAME_REGEX.is_match(username)
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Parses one of a fixed set of wire values.
pub fn choice<T: FromStr>(errors: &mut FieldErrors, field: &str, value: &str) -> Option<T> {
    let value = value.trim();

    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }

    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, invalid_choice_message(value));
            None
        }
    }
}

pub fn invalid_choice_message(value: &str) -> String {
    format!("\"{}\" is not a valid choice.", value)
}

pub fn check_coordinate(errors: &mut FieldErrors, field: &str, value: f64, bound: f64) {
    if !value.is_finite() || value.abs() > bound {
        errors.add(
            field,
            format!("Ensure this value is between -{} and {}.", bound, bound),
        );
    }
}
