//! Profile sub-records embedded in a user.
//!
//! These are plain attribute bags with no identity of their own. They are
//! owned by the [`crate::domain::User`] that holds them and are replaced
//! wholesale on update. Unknown fields are rejected so that a payload of the
//! wrong shape fails validation instead of being silently truncated.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Declared sex of the performer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Accept `YYYY-MM-DD` or an RFC 3339 timestamp, keeping its date part.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(&text).map(|stamp| stamp.date_naive()))
        .map_err(|_| serde::de::Error::custom(format!("`{text}` is not a date")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PhoneNumber {
    Text(String),
    Digits(serde_json::Number),
}

/// Accept a phone number sent either as text or as a bare number.
fn phone_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PhoneNumber::deserialize(deserializer)? {
        PhoneNumber::Text(text) => text,
        PhoneNumber::Digits(number) => number.to_string(),
    })
}

/// Personal details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonalData {
    pub name: String,
    pub surname: String,
    /// Calendar date, serialised as `YYYY-MM-DD`.
    #[serde(deserialize_with = "calendar_date")]
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub twins: bool,
    pub province: String,
    #[serde(deserialize_with = "phone_number")]
    pub phone: String,
}

/// Physical appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhysicalData {
    /// Height in metres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub physical_condition: String,
    pub eyes: String,
    pub hair: String,
    pub ethnicity: String,
    pub beard: bool,
    pub tattoos: bool,
    pub piercings: bool,
}

/// Professional background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfessionalData {
    pub profession: String,
    pub singing: bool,
    pub dancing: bool,
    #[serde(alias = "otherHabilities")]
    pub other_abilities: String,
    pub previous_job_experiences: u32,
    pub curriculum: Vec<String>,
}
