//! User account model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::{CastingApplication, PersonalData, PhysicalData, ProfessionalData};

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must be a valid UUID")]
    InvalidId,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("videobook link must not be empty")]
    EmptyVideobookLink,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier from its canonical string form.
    ///
    /// Surrounding whitespace is rejected rather than trimmed.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Account email, trimmed of surrounding whitespace.
///
/// Emails are unique across users; the store enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and normalise an email.
    ///
    /// # Examples
    /// ```
    /// use castme::domain::Email;
    ///
    /// let email = Email::new("  ada@example.com ").unwrap();
    /// assert_eq!(email.as_ref(), "ada@example.com");
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Account password.
///
/// Stored verbatim: surrounding whitespace is kept so comparisons match what
/// the user typed. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate a password; it must contain something other than whitespace.
    pub fn new(password: impl Into<String>) -> Result<Self, UserValidationError> {
        let password = password.into();
        if password.trim().is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(password)))
    }

    /// Borrow the password text.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

/// Link to the performer's showreel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideobookLink(String);

impl VideobookLink {
    /// Validate a link; blank links are rejected.
    pub fn new(link: impl Into<String>) -> Result<Self, UserValidationError> {
        let link = link.into();
        if link.trim().is_empty() {
            return Err(UserValidationError::EmptyVideobookLink);
        }
        Ok(Self(link))
    }
}

impl AsRef<str> for VideobookLink {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<VideobookLink> for String {
    fn from(value: VideobookLink) -> Self {
        value.0
    }
}

impl TryFrom<String> for VideobookLink {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Profile fields a user supplies on registration and replaces on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub personal_data: PersonalData,
    pub physical_data: PhysicalData,
    pub professional_data: ProfessionalData,
    pub videobook_link: VideobookLink,
    /// Image references, in display order.
    pub pics: Vec<String>,
}

/// Application user.
///
/// ## Invariants
/// - `email` is trimmed and non-empty, and unique across users.
/// - `password` is non-blank.
/// - `castings` keeps application order.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    password: Password,
    details: UserDetails,
    castings: Vec<CastingApplication>,
}

impl User {
    /// Build a freshly registered user with a new id and no castings.
    pub fn register(email: Email, password: Password, details: UserDetails) -> Self {
        Self::from_parts(UserId::random(), email, password, details, Vec::new())
    }

    /// Reassemble a user from stored components.
    pub fn from_parts(
        id: UserId,
        email: Email,
        password: Password,
        details: UserDetails,
        castings: Vec<CastingApplication>,
    ) -> Self {
        Self {
            id,
            email,
            password,
            details,
            castings,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Account email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Stored password.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Replaceable profile fields.
    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    /// Casting applications, in application order.
    pub fn castings(&self) -> &[CastingApplication] {
        &self.castings
    }

    /// Whether `email` and `password` identify this account.
    pub fn has_credentials(&self, email: &Email, password: &Password) -> bool {
        self.email == *email && self.password == *password
    }

    /// Replace credentials and profile fields, keeping id and castings.
    #[must_use]
    pub fn with_changes(self, email: Email, password: Password, details: UserDetails) -> Self {
        Self {
            email,
            password,
            details,
            ..self
        }
    }

    /// Append a casting application.
    #[must_use]
    pub fn with_application(mut self, application: CastingApplication) -> Self {
        self.castings.push(application);
        self
    }

    /// Public projection without the id and password.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            email: self.email.clone(),
            details: self.details.clone(),
            castings: self.castings.clone(),
        }
    }
}

/// What `retrieve` hands back: everything except the internal id and the
/// password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: Email,
    #[serde(flatten)]
    pub details: UserDetails,
    pub castings: Vec<CastingApplication>,
}

#[cfg(test)]
mod tests;
