//! Domain primitives, the account service, and its ports.
//!
//! Purpose: define the account model and the rules every operation enforces
//! independently of HTTP or storage. Types here never import inbound or
//! outbound adapters; adapters depend on the domain, not the other way round.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`User`], [`UserProfile`], and the value types they are built from.
//! - [`UserAccountService`]: the validation and orchestration layer,
//!   implementing the driving ports in [`ports`].

pub mod argument;
mod auth;
mod casting;
pub mod error;
pub mod ports;
mod profile;
mod trace_id;
mod user;
mod user_account_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::auth::Credentials;
pub use self::casting::{
    Casting, CastingApplication, CastingId, Project, ProjectId, ResolvedApplication,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::profile::{PersonalData, PhysicalData, ProfessionalData, Sex};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Email, Password, User, UserDetails, UserId, UserProfile, UserValidationError, VideobookLink,
};
pub use self::user_account_service::UserAccountService;
