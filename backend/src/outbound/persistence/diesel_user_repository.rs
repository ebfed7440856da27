//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Profile records, pics, and casting applications are serialised into
//! `jsonb` columns. The unique index on `users.email` enforces email
//! uniqueness; violations surface as `DuplicateEmail`.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, Password, User, UserDetails, UserId, VideobookLink};

use super::diesel_error_mapping::{DieselFailure, classify, failure_message};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

fn map_diesel_error(
    error: diesel::result::Error,
    operation: &str,
    email: Option<&Email>,
) -> UserPersistenceError {
    match (classify(&error, operation), email) {
        (DieselFailure::UniqueViolation, Some(email)) => {
            UserPersistenceError::duplicate_email(email.as_ref())
        }
        (DieselFailure::Connection, _) => {
            UserPersistenceError::connection(failure_message(DieselFailure::Connection))
        }
        (failure, _) => UserPersistenceError::query(failure_message(failure)),
    }
}

fn to_document<T: Serialize + ?Sized>(value: &T, column: &str) -> Result<Value, UserPersistenceError> {
    serde_json::to_value(value).map_err(|err| {
        UserPersistenceError::query(format!("failed to encode {column}: {err}"))
    })
}

fn from_document<T: DeserializeOwned>(
    value: Value,
    column: &str,
    id: &uuid::Uuid,
) -> Result<T, UserPersistenceError> {
    serde_json::from_value(value).map_err(|err| {
        warn!(user_id = %id, %column, error = %err, "stored user document is malformed");
        UserPersistenceError::query(format!("stored {column} is malformed"))
    })
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = row.id;
    let malformed = |column: &str| UserPersistenceError::query(format!("stored {column} is malformed"));

    let email = Email::new(&row.email).map_err(|_| malformed("email"))?;
    let password = Password::new(row.password).map_err(|_| malformed("password"))?;
    let videobook_link =
        VideobookLink::new(row.videobook_link).map_err(|_| malformed("videobook_link"))?;
    let details = UserDetails {
        personal_data: from_document(row.personal_data, "personal_data", &id)?,
        physical_data: from_document(row.physical_data, "physical_data", &id)?,
        professional_data: from_document(row.professional_data, "professional_data", &id)?,
        videobook_link,
        pics: from_document(row.pics, "pics", &id)?,
    };
    let castings = from_document(row.castings, "castings", &id)?;

    Ok(User::from_parts(
        UserId::from_uuid(id),
        email,
        password,
        details,
        castings,
    ))
}

/// JSON columns shared by inserts and updates.
struct Documents {
    personal_data: Value,
    physical_data: Value,
    professional_data: Value,
    pics: Value,
    castings: Value,
}

impl Documents {
    fn of(user: &User) -> Result<Self, UserPersistenceError> {
        let details = user.details();
        Ok(Self {
            personal_data: to_document(&details.personal_data, "personal_data")?,
            physical_data: to_document(&details.physical_data, "physical_data")?,
            professional_data: to_document(&details.professional_data, "professional_data")?,
            pics: to_document(&details.pics, "pics")?,
            castings: to_document(user.castings(), "castings")?,
        })
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError> {
        let documents = Documents::of(user)?;
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            email: user.email().as_ref(),
            password: user.password().expose(),
            personal_data: documents.personal_data,
            physical_data: documents.physical_data,
            professional_data: documents.professional_data,
            videobook_link: user.details().videobook_link.as_ref(),
            pics: documents.pics,
            castings: documents.castings,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "insert user", Some(user.email())))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find user by email", None))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find user by id", None))?;

        row.map(row_to_user).transpose()
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let documents = Documents::of(user)?;
        let changes = UserUpdate {
            email: user.email().as_ref(),
            password: user.password().expose(),
            personal_data: documents.personal_data,
            physical_data: documents.physical_data,
            professional_data: documents.professional_data,
            videobook_link: user.details().videobook_link.as_ref(),
            pics: documents.pics,
            castings: documents.castings,
            updated_at: Utc::now(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::update(users::table.find(*user.id().as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update user", Some(user.email())))?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::delete(users::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete user", None))?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion tests; queries are covered against a live database.

    use super::*;
    use crate::domain::CastingApplication;
    use crate::domain::test_support::{
        EMAIL, PASSWORD, personal_data, physical_data, professional_data, user,
    };
    use crate::domain::{CastingId, ProjectId};
    use rstest::rstest;
    use serde_json::json;

    fn row_for(user: &User) -> UserRow {
        let documents = Documents::of(user).expect("documents");
        UserRow {
            id: *user.id().as_uuid(),
            email: user.email().to_string(),
            password: user.password().expose().to_owned(),
            personal_data: documents.personal_data,
            physical_data: documents.physical_data,
            professional_data: documents.professional_data,
            videobook_link: user.details().videobook_link.as_ref().to_owned(),
            pics: documents.pics,
            castings: documents.castings,
        }
    }

    #[rstest]
    fn rows_round_trip_through_documents() {
        let original = user().with_application(CastingApplication::new(
            ProjectId::random(),
            vec![CastingId::random()],
        ));
        let restored = row_to_user(row_for(&original)).expect("row converts");
        assert_eq!(restored, original);
    }

    #[rstest]
    fn documents_use_the_wire_field_names() {
        let documents = Documents::of(&user()).expect("documents");
        assert_eq!(documents.personal_data, personal_data());
        assert_eq!(documents.physical_data, physical_data());
        assert_eq!(documents.professional_data, professional_data());
        assert_eq!(documents.castings, json!([]));
    }

    #[rstest]
    fn castings_document_lists_every_application() {
        let project = ProjectId::random();
        let casting = CastingId::random();
        let with_application =
            user().with_application(CastingApplication::new(project, vec![casting]));

        let documents = Documents::of(&with_application).expect("documents");

        assert_eq!(
            documents.castings,
            json!([{ "project": project.to_string(), "castings": [casting.to_string()] }])
        );
    }

    #[rstest]
    #[case::personal_data(|row: &mut UserRow| row.personal_data = json!("nope"))]
    #[case::castings(|row: &mut UserRow| row.castings = json!({}))]
    #[case::password(|row: &mut UserRow| row.password = "  ".to_owned())]
    fn malformed_rows_are_query_errors(#[case] corrupt: fn(&mut UserRow)) {
        let mut row = row_for(&user());
        corrupt(&mut row);
        let err = row_to_user(row).expect_err("malformed");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn stored_values_are_kept_verbatim() {
        let stored = row_to_user(row_for(&user())).expect("row converts");
        assert_eq!(stored.email().as_ref(), EMAIL);
        assert_eq!(stored.password().expose(), PASSWORD);
    }
}
