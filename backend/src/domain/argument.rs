//! Validation of raw, caller-supplied arguments.
//!
//! Operations receive their arguments as untyped JSON values exactly as a
//! client sent them (a missing argument is `null`). The helpers here turn one
//! raw argument into a typed value or into the error a client expects:
//!
//! - `"<field> is not a string"` when a string was required,
//! - `"<field> is empty or blank"` when the string only holds whitespace,
//! - `"<field> is not what it should be"` when a record or list has the
//!   wrong shape.
//!
//! Callers validate arguments in declaration order and stop at the first
//! failure, so the first invalid argument determines the reported error.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{Email, Error, Password, VideobookLink};

/// Human-readable label of an operation argument, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Wrap a static label.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Borrow the label.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Labels for every argument accepted by the account operations.
pub mod fields {
    use super::FieldName;

    /// Email identifying an existing or new account.
    pub const USER_EMAIL: FieldName = FieldName::new("user email");
    /// Password matched verbatim against the stored one.
    pub const USER_PASSWORD: FieldName = FieldName::new("user password");
    /// Account identifier in path or body position.
    pub const USER_ID: FieldName = FieldName::new("user id");
    /// Replacement email on update.
    pub const USER_NEW_EMAIL: FieldName = FieldName::new("user new email");
    /// Replacement password on update.
    pub const USER_NEW_PASSWORD: FieldName = FieldName::new("user new password");
    /// Personal details record.
    pub const PERSONAL_DATA: FieldName = FieldName::new("personal data");
    /// Physical appearance record.
    pub const PHYSICAL_DATA: FieldName = FieldName::new("physical data");
    /// Professional background record.
    pub const PROFESSIONAL_DATA: FieldName = FieldName::new("professional data");
    /// Link to the performer's videobook.
    pub const VIDEOBOOK_LINK: FieldName = FieldName::new("videobook link");
    /// List of image references.
    pub const PICS: FieldName = FieldName::new("pics");
}

fn not_a_string(field: FieldName) -> Error {
    Error::invalid_type(format!("{field} is not a string"))
        .with_details(json!({ "field": field.as_str(), "code": "not_a_string" }))
}

fn empty_or_blank(field: FieldName) -> Error {
    Error::invalid_value(format!("{field} is empty or blank"))
        .with_details(json!({ "field": field.as_str(), "code": "empty_or_blank" }))
}

fn wrong_shape(field: FieldName) -> Error {
    Error::invalid_type(format!("{field} is not what it should be"))
        .with_details(json!({ "field": field.as_str(), "code": "wrong_shape" }))
}

/// Require a string argument that is not empty once trimmed.
///
/// The untrimmed string is returned; normalisation belongs to the value type
/// that consumes it.
///
/// # Examples
/// ```
/// use castme::domain::argument::{fields, require_text};
/// use castme::domain::ErrorCode;
/// use serde_json::json;
///
/// assert_eq!(require_text(fields::USER_ID, &json!("abc")).unwrap(), "abc");
///
/// let err = require_text(fields::USER_ID, &json!("   ")).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::InvalidValue);
/// assert_eq!(err.message(), "user id is empty or blank");
/// ```
pub fn require_text(field: FieldName, value: &Value) -> Result<&str, Error> {
    let Some(text) = value.as_str() else {
        return Err(not_a_string(field));
    };
    if text.trim().is_empty() {
        return Err(empty_or_blank(field));
    }
    Ok(text)
}

/// Require an object argument that deserialises into `T`.
pub fn require_record<T>(field: FieldName, value: &Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    if !value.is_object() {
        return Err(wrong_shape(field));
    }
    T::deserialize(value).map_err(|_| wrong_shape(field))
}

/// Require a list of strings.
pub fn require_text_list(field: FieldName, value: &Value) -> Result<Vec<String>, Error> {
    let Some(items) = value.as_array() else {
        return Err(wrong_shape(field));
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or_else(|| wrong_shape(field)))
        .collect()
}

/// Require a non-blank string and parse it as an [`Email`].
pub fn require_email(field: FieldName, value: &Value) -> Result<Email, Error> {
    let text = require_text(field, value)?;
    Email::new(text).map_err(|_| empty_or_blank(field))
}

/// Require a non-blank string and keep it verbatim as a [`Password`].
pub fn require_password(field: FieldName, value: &Value) -> Result<Password, Error> {
    let text = require_text(field, value)?;
    Password::new(text).map_err(|_| empty_or_blank(field))
}

/// Require a non-blank string and wrap it as a [`VideobookLink`].
pub fn require_videobook_link(field: FieldName, value: &Value) -> Result<VideobookLink, Error> {
    let text = require_text(field, value)?;
    VideobookLink::new(text).map_err(|_| empty_or_blank(field))
}
