//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, UserAccountCommand, UserAccountQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub accounts: Arc<dyn UserAccountCommand>,
    pub profiles: Arc<dyn UserAccountQuery>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use castme::domain::UserAccountService;
    /// use castme::inbound::http::state::HttpState;
    /// use castme::outbound::memory::InMemoryDocumentStore;
    ///
    /// let store = Arc::new(InMemoryDocumentStore::new());
    /// let service = Arc::new(UserAccountService::new(store.clone(), store));
    /// let state = HttpState::new(service.clone(), service.clone(), service);
    /// # let _ = state;
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        accounts: Arc<dyn UserAccountCommand>,
        profiles: Arc<dyn UserAccountQuery>,
    ) -> Self {
        Self {
            login,
            accounts,
            profiles,
        }
    }

    /// Expose one service through every port.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: LoginService + UserAccountCommand + UserAccountQuery + 'static,
    {
        Self::new(service.clone(), service.clone(), service)
    }
}
