//! Account credentials.
//!
//! Credentials are built from the two raw arguments every authenticated
//! operation receives, validated email first, then password.

use serde_json::Value;

use super::argument::{fields, require_email, require_password};
use super::{Email, Error, Password};

/// Validated email and password pair.
///
/// ## Invariants
/// - `email` is trimmed and not empty.
/// - `password` is not blank and keeps the caller's whitespace.
///
/// # Examples
/// ```
/// use castme::domain::Credentials;
/// use serde_json::json;
///
/// let creds = Credentials::from_arguments(&json!(" ada@example.com "), &json!("pw")).unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// assert_eq!(creds.password().expose(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: Email,
    password: Password,
}

impl Credentials {
    /// Validate raw email and password arguments, in that order.
    pub fn from_arguments(email: &Value, password: &Value) -> Result<Self, Error> {
        let email = require_email(fields::USER_EMAIL, email)?;
        let password = require_password(fields::USER_PASSWORD, password)?;
        Ok(Self { email, password })
    }

    /// Account email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password as typed.
    pub fn password(&self) -> &Password {
        &self.password
    }
}
