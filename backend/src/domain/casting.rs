//! Projects, castings, and a user's casting applications.
//!
//! Projects and castings are owned elsewhere; users only reference them by
//! identifier. [`ResolvedApplication`] is the read model produced when those
//! references are loaded.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

macro_rules! document_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
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

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

document_id! {
    /// Identifier of a [`Project`].
    ProjectId
}

document_id! {
    /// Identifier of a [`Casting`].
    CastingId
}

/// A production open for casting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Free-form attributes maintained by the project owner.
    #[serde(default)]
    pub details: Value,
}

/// A role or call within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Casting {
    pub id: CastingId,
    pub project_id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub details: Value,
}

/// One entry of a user's casting list: the castings applied to within a
/// single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastingApplication {
    pub project: ProjectId,
    pub castings: Vec<CastingId>,
}

impl CastingApplication {
    /// Build an application entry.
    pub fn new(project: ProjectId, castings: Vec<CastingId>) -> Self {
        Self { project, castings }
    }
}

/// A casting application with its references loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedApplication {
    pub project: Project,
    pub castings: Vec<Casting>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn identifiers_serialise_as_plain_strings() {
        let id = ProjectId::from_uuid(Uuid::nil());
        assert_eq!(
            serde_json::to_value(id).expect("id serialises"),
            json!("00000000-0000-0000-0000-000000000000")
        );
    }

    #[rstest]
    fn application_round_trips_through_json() {
        let application = CastingApplication::new(
            ProjectId::random(),
            vec![CastingId::random(), CastingId::random()],
        );
        let value = serde_json::to_value(&application).expect("serialises");
        let decoded: CastingApplication = serde_json::from_value(value).expect("deserialises");
        assert_eq!(decoded, application);
    }
}
