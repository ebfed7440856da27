//! CastMe user account service.
//!
//! Hexagonal layout: [`domain`] holds the account model, validation, and the
//! ports; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! provides the document stores behind the driven ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
