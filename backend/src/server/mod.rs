//! Server construction and middleware wiring.

mod config;

pub use config::{AppSettings, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use castme::Trace;
use castme::doc::openapi_json;
use castme::domain::UserAccountService;
use castme::inbound::http::configure_api;
use castme::inbound::http::health::{HealthState, live, ready};
use castme::inbound::http::state::HttpState;
use castme::outbound::memory::InMemoryDocumentStore;
use castme::outbound::persistence::{DieselCastingRepository, DieselUserRepository};

use std::sync::Arc;

/// Select the document store: PostgreSQL when a pool is configured,
/// otherwise process memory.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL document store");
            HttpState::from_service(Arc::new(UserAccountService::new(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselCastingRepository::new(pool.clone())),
            )))
        }
        None => {
            info!("using in-memory document store");
            let store = Arc::new(InMemoryDocumentStore::new());
            HttpState::from_service(Arc::new(UserAccountService::new(store.clone(), store)))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(openapi_json)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
