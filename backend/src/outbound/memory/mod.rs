//! In-process document store implementing both driven ports.
//!
//! Used when no database URL is configured and by the integration tests.
//! Each collection lives behind one `RwLock`, so the email uniqueness check
//! and the write that depends on it happen under the same exclusive guard.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{
    CastingRepository, CastingRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{Casting, CastingId, Email, Project, ProjectId, User, UserId};

/// Volatile store for users, projects, and castings.
///
/// # Examples
/// ```
/// use castme::outbound::memory::InMemoryDocumentStore;
///
/// let store = InMemoryDocumentStore::default();
/// # let _ = store;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    users: RwLock<HashMap<UserId, User>>,
    projects: RwLock<HashMap<ProjectId, Project>>,
    castings: RwLock<HashMap<CastingId, Casting>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a project document.
    pub async fn insert_project(&self, project: Project) {
        self.projects.write().await.insert(project.id, project);
    }

    /// Add or replace a casting document.
    pub async fn insert_casting(&self, casting: Casting) {
        self.castings.write().await.insert(casting.id, casting);
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

fn email_taken(users: &HashMap<UserId, User>, email: &Email, except: Option<&UserId>) -> bool {
    users
        .values()
        .any(|user| user.email() == email && Some(user.id()) != except)
}

#[async_trait]
impl UserRepository for InMemoryDocumentStore {
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().await;
        if email_taken(&users, user.email(), None) {
            debug!(email = %user.email(), "email already registered");
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut users = self.users.write().await;
        if !users.contains_key(user.id()) {
            return Ok(false);
        }
        if email_taken(&users, user.email(), Some(user.id())) {
            debug!(email = %user.email(), "email held by another user");
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        users.insert(*user.id(), user.clone());
        Ok(true)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.users.write().await.remove(id).is_some())
    }
}

#[async_trait]
impl CastingRepository for InMemoryDocumentStore {
    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, CastingRepositoryError> {
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn find_castings(
        &self,
        ids: &[CastingId],
    ) -> Result<Vec<Casting>, CastingRepositoryError> {
        let castings = self.castings.read().await;
        Ok(ids.iter().filter_map(|id| castings.get(id).cloned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{EMAIL, OTHER_EMAIL, PASSWORD, user, user_with};
    use crate::domain::UserDetails;
    use serde_json::json;

    fn change_email(user: User, email: &str) -> User {
        let password = user.password().clone();
        let details: UserDetails = user.details().clone();
        user.with_changes(Email::new(email).expect("email"), password, details)
    }

    #[tokio::test]
    async fn create_then_find_by_email_and_id() {
        let store = InMemoryDocumentStore::new();
        let stored = user();
        store.create(&stored).await.expect("create");

        let email = Email::new(EMAIL).expect("email");
        assert_eq!(
            store.find_by_email(&email).await.expect("lookup"),
            Some(stored.clone())
        );
        assert_eq!(
            store.find_by_id(stored.id()).await.expect("lookup"),
            Some(stored)
        );
    }

    #[tokio::test]
    async fn create_rejects_a_second_account_with_the_same_email() {
        let store = InMemoryDocumentStore::new();
        store.create(&user()).await.expect("first");

        let err = store
            .create(&user_with(EMAIL, "other"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, UserPersistenceError::duplicate_email(EMAIL));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn update_may_keep_its_own_email_but_not_take_another() {
        let store = InMemoryDocumentStore::new();
        let first = user();
        let second = user_with(OTHER_EMAIL, PASSWORD);
        store.create(&first).await.expect("first");
        store.create(&second).await.expect("second");

        assert!(store.update(&first).await.expect("same email"));

        let err = store
            .update(&change_email(second, EMAIL))
            .await
            .expect_err("taken");
        assert_eq!(err, UserPersistenceError::duplicate_email(EMAIL));
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_documents() {
        let store = InMemoryDocumentStore::new();
        let ghost = user();
        assert!(!store.update(&ghost).await.expect("update"));
        assert!(!store.delete(ghost.id()).await.expect("delete"));
    }

    #[tokio::test]
    async fn delete_frees_the_email() {
        let store = InMemoryDocumentStore::new();
        let stored = user();
        store.create(&stored).await.expect("create");
        assert!(store.delete(stored.id()).await.expect("delete"));
        store
            .create(&user_with(EMAIL, "fresh"))
            .await
            .expect("email is free again");
    }

    #[tokio::test]
    async fn castings_come_back_in_requested_order_skipping_unknown() {
        let store = InMemoryDocumentStore::new();
        let project = Project {
            id: ProjectId::random(),
            name: "Hamlet".to_owned(),
            details: json!({}),
        };
        let make = |title: &str| Casting {
            id: CastingId::random(),
            project_id: project.id,
            title: title.to_owned(),
            details: json!({}),
        };
        let (a, b) = (make("A"), make("B"));
        store.insert_project(project.clone()).await;
        store.insert_casting(a.clone()).await;
        store.insert_casting(b.clone()).await;

        let found = store
            .find_castings(&[b.id, CastingId::random(), a.id])
            .await
            .expect("castings");
        assert_eq!(found, vec![b, a]);
        assert_eq!(
            store.find_project(&project.id).await.expect("project"),
            Some(project)
        );
    }
}
