//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use super::schema::{castings, projects, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub personal_data: Value,
    pub physical_data: Value,
    pub professional_data: Value,
    pub videobook_link: String,
    pub pics: Value,
    pub castings: Value,
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password: &'a str,
    pub personal_data: Value,
    pub physical_data: Value,
    pub professional_data: Value,
    pub videobook_link: &'a str,
    pub pics: Value,
    pub castings: Value,
}

/// Changeset replacing every mutable column of a user record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub personal_data: Value,
    pub physical_data: Value,
    pub professional_data: Value,
    pub videobook_link: &'a str,
    pub pics: Value,
    pub castings: Value,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the projects table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub details: Value,
}

/// Row struct for reading from the castings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = castings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CastingRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub details: Value,
}
