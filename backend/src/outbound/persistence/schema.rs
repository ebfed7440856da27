//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Nested profile
//! records and casting applications are stored as `jsonb` documents.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Uuid,
        /// Trimmed email; unique across rows.
        email -> Varchar,
        /// Password exactly as the user typed it.
        password -> Text,
        personal_data -> Jsonb,
        physical_data -> Jsonb,
        professional_data -> Jsonb,
        videobook_link -> Text,
        /// JSON array of image references.
        pics -> Jsonb,
        /// JSON array of `{ project, castings }` applications.
        castings -> Jsonb,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Productions users apply to.
    projects (id) {
        id -> Uuid,
        name -> Text,
        details -> Jsonb,
    }
}

diesel::table! {
    /// Roles offered within a project.
    castings (id) {
        id -> Uuid,
        project_id -> Uuid,
        title -> Text,
        details -> Jsonb,
    }
}

diesel::joinable!(castings -> projects (project_id));

diesel::allow_tables_to_appear_in_same_query!(castings, projects, users);
