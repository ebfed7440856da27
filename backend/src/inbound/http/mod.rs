//! HTTP inbound adapter exposing the account operations as REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;

/// JSON extractor configuration that reports malformed bodies in the domain
/// error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Mount the `/api` scope with its JSON configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use castme::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .configure(users::configure),
    );
}
