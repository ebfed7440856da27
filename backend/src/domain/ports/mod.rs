//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`LoginService`, `UserAccountCommand`, `UserAccountQuery`)
//! are what inbound adapters call. Driven ports (`UserRepository`,
//! `CastingRepository`) are what the domain needs from storage; each exposes
//! a strongly typed error so adapters map their failures into predictable
//! variants.

mod macros;
pub(crate) use macros::define_port_error;

mod casting_repository;
mod login_service;
mod user_account_command;
mod user_account_query;
mod user_repository;

#[cfg(test)]
pub use casting_repository::MockCastingRepository;
pub use casting_repository::{CastingRepository, CastingRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{AuthenticateRequest, LoginService};
#[cfg(test)]
pub use user_account_command::MockUserAccountCommand;
pub use user_account_command::{
    RegisterUserRequest, UnregisterUserRequest, UpdateUserRequest, UserAccountCommand,
};
#[cfg(test)]
pub use user_account_query::MockUserAccountQuery;
pub use user_account_query::{RetrieveUserRequest, UserAccountQuery, UserCastingsRequest};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
