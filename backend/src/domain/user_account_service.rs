//! Account service implementing the login, command, and query ports.
//!
//! Every operation first validates all of its raw arguments in declaration
//! order, failing on the first invalid one, and only then talks to the
//! repositories. Email uniqueness is left to the user repository, which
//! reports collisions as [`UserPersistenceError::DuplicateEmail`]; the service
//! translates that into a conflict.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use futures_util::try_join;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::argument::{
    fields, require_email, require_password, require_record, require_text, require_text_list,
    require_videobook_link,
};
use crate::domain::ports::{
    AuthenticateRequest, CastingRepository, CastingRepositoryError, LoginService,
    RegisterUserRequest, RetrieveUserRequest, UnregisterUserRequest, UpdateUserRequest,
    UserAccountCommand, UserAccountQuery, UserCastingsRequest, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    CastingApplication, Credentials, Error, ResolvedApplication, User, UserDetails, UserId,
    UserProfile,
};

const WRONG_CREDENTIALS: &str = "wrong credentials";

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateEmail { email } => {
            Error::conflict(format!("user with email {email} already exists"))
        }
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_casting_error(error: CastingRepositoryError) -> Error {
    match error {
        CastingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("casting repository unavailable: {message}"))
        }
        CastingRepositoryError::Query { message } => {
            Error::internal(format!("casting repository error: {message}"))
        }
    }
}

fn user_not_found(raw_id: &str) -> Error {
    Error::not_found(format!("user with id {raw_id} does not exist"))
}

/// Raw profile arguments shared by `register` and `update`.
struct DetailArguments<'a> {
    personal_data: &'a Value,
    physical_data: &'a Value,
    professional_data: &'a Value,
    videobook_link: &'a Value,
    pics: &'a Value,
}

impl DetailArguments<'_> {
    fn validate(&self) -> Result<UserDetails, Error> {
        Ok(UserDetails {
            personal_data: require_record(fields::PERSONAL_DATA, self.personal_data)?,
            physical_data: require_record(fields::PHYSICAL_DATA, self.physical_data)?,
            professional_data: require_record(fields::PROFESSIONAL_DATA, self.professional_data)?,
            videobook_link: require_videobook_link(fields::VIDEOBOOK_LINK, self.videobook_link)?,
            pics: require_text_list(fields::PICS, self.pics)?,
        })
    }
}

/// Validation and orchestration layer over the user and casting stores.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use castme::domain::UserAccountService;
/// use castme::outbound::memory::InMemoryDocumentStore;
///
/// let store = Arc::new(InMemoryDocumentStore::default());
/// let service = UserAccountService::new(store.clone(), store);
/// # let _ = service;
/// ```
#[derive(Clone)]
pub struct UserAccountService<U, C> {
    users: Arc<U>,
    castings: Arc<C>,
}

impl<U, C> UserAccountService<U, C> {
    /// Create a service over the given repositories.
    pub fn new(users: Arc<U>, castings: Arc<C>) -> Self {
        Self { users, castings }
    }
}

impl<U, C> UserAccountService<U, C>
where
    U: UserRepository,
    C: CastingRepository,
{
    async fn load_user(&self, raw_id: &str) -> Result<User, Error> {
        let Ok(id) = UserId::new(raw_id) else {
            return Err(user_not_found(raw_id));
        };
        self.users
            .find_by_id(&id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| user_not_found(raw_id))
    }

    async fn load_authenticated(&self, credentials: &Credentials) -> Result<User, Error> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?;
        match user {
            Some(user) if user.password() == credentials.password() => Ok(user),
            Some(user) => {
                debug!(user_id = %user.id(), "password mismatch");
                Err(Error::unauthorized(WRONG_CREDENTIALS))
            }
            None => {
                debug!("no account for email");
                Err(Error::unauthorized(WRONG_CREDENTIALS))
            }
        }
    }

    async fn resolve(&self, application: &CastingApplication) -> Result<ResolvedApplication, Error> {
        let project = async {
            self.castings
                .find_project(&application.project)
                .await
                .map_err(map_casting_error)?
                .ok_or_else(|| {
                    Error::not_found(format!(
                        "project with id {} does not exist",
                        application.project
                    ))
                })
        };
        let castings = async {
            self.castings
                .find_castings(&application.castings)
                .await
                .map_err(map_casting_error)
        };
        let (project, castings) = try_join!(project, castings)?;

        if let Some(missing) = application
            .castings
            .iter()
            .find(|id| !castings.iter().any(|casting| casting.id == **id))
        {
            return Err(Error::not_found(format!(
                "casting with id {missing} does not exist"
            )));
        }

        Ok(ResolvedApplication { project, castings })
    }
}

#[async_trait]
impl<U, C> LoginService for UserAccountService<U, C>
where
    U: UserRepository,
    C: CastingRepository,
{
    async fn authenticate(&self, request: AuthenticateRequest) -> Result<UserId, Error> {
        let credentials = Credentials::from_arguments(&request.email, &request.password)?;
        let user = self.load_authenticated(&credentials).await?;
        Ok(*user.id())
    }
}

#[async_trait]
impl<U, C> UserAccountCommand for UserAccountService<U, C>
where
    U: UserRepository,
    C: CastingRepository,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<(), Error> {
        let credentials = Credentials::from_arguments(&request.email, &request.password)?;
        let details = DetailArguments {
            personal_data: &request.personal_data,
            physical_data: &request.physical_data,
            professional_data: &request.professional_data,
            videobook_link: &request.videobook_link,
            pics: &request.pics,
        }
        .validate()?;

        let user = User::register(
            credentials.email().clone(),
            credentials.password().clone(),
            details,
        );
        self.users.create(&user).await.map_err(map_user_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(())
    }

    async fn update(&self, request: UpdateUserRequest) -> Result<(), Error> {
        let credentials = Credentials::from_arguments(&request.email, &request.password)?;
        let new_email = require_email(fields::USER_NEW_EMAIL, &request.new_email)?;
        let new_password = require_password(fields::USER_NEW_PASSWORD, &request.new_password)?;
        let details = DetailArguments {
            personal_data: &request.personal_data,
            physical_data: &request.physical_data,
            professional_data: &request.professional_data,
            videobook_link: &request.videobook_link,
            pics: &request.pics,
        }
        .validate()?;

        let user = self.load_authenticated(&credentials).await?;
        let user_id = *user.id();
        let updated = user.with_changes(new_email, new_password, details);

        if !self.users.update(&updated).await.map_err(map_user_error)? {
            return Err(user_not_found(&user_id.to_string()));
        }
        info!(user_id = %user_id, "user updated");
        Ok(())
    }

    async fn unregister(&self, request: UnregisterUserRequest) -> Result<(), Error> {
        let raw_id = require_text(fields::USER_ID, &request.id)?;
        let credentials = Credentials::from_arguments(&request.email, &request.password)?;

        let user = self.load_user(raw_id).await?;
        if !user.has_credentials(credentials.email(), credentials.password()) {
            debug!(user_id = %user.id(), "unregister credentials mismatch");
            return Err(Error::unauthorized(WRONG_CREDENTIALS));
        }

        if !self.users.delete(user.id()).await.map_err(map_user_error)? {
            return Err(user_not_found(raw_id));
        }
        info!(user_id = %user.id(), "user unregistered");
        Ok(())
    }
}

#[async_trait]
impl<U, C> UserAccountQuery for UserAccountService<U, C>
where
    U: UserRepository,
    C: CastingRepository,
{
    async fn retrieve(&self, request: RetrieveUserRequest) -> Result<UserProfile, Error> {
        let raw_id = require_text(fields::USER_ID, &request.id)?;
        let user = self.load_user(raw_id).await?;
        Ok(user.profile())
    }

    async fn castings(
        &self,
        request: UserCastingsRequest,
    ) -> Result<Vec<ResolvedApplication>, Error> {
        let raw_id = require_text(fields::USER_ID, &request.user_id)?;
        let user = self.load_user(raw_id).await?;
        let resolved = try_join_all(
            user.castings()
                .iter()
                .map(|application| self.resolve(application)),
        )
        .await?;
        debug!(user_id = %user.id(), entries = resolved.len(), "castings resolved");
        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "user_account_service_tests.rs"]
mod tests;
