//! User account API handlers.
//!
//! ```text
//! POST   /api/users                 register
//! POST   /api/auth                  authenticate
//! GET    /api/users/{id}            retrieve
//! PATCH  /api/users                 update
//! DELETE /api/users/{id}            unregister
//! GET    /api/users/{id}/castings   castings
//! ```
//!
//! Bodies are handed to the domain untouched: every field is an untyped
//! JSON value and absent fields arrive as `null`, so the service reports
//! type and blank-value errors itself.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ResolvedApplication;
use crate::domain::UserProfile;
use crate::domain::ports::{
    AuthenticateRequest, RegisterUserRequest, RetrieveUserRequest, UnregisterUserRequest,
    UpdateUserRequest, UserCastingsRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CredentialsSchema, ErrorSchema, RegisterUserRequestSchema, ResolvedApplicationSchema,
    UpdateUserRequestSchema, UserProfileSchema,
};
use crate::inbound::http::state::HttpState;

/// Body of `DELETE /api/users/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UnregisterBody {
    pub email: Value,
    pub password: Value,
}

/// `201` body of a successful registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Registered {
    pub registered: bool,
}

/// `200` body of a successful authentication.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Authenticated {
    /// Identifier of the authenticated account.
    #[schema(value_type = String, format = Uuid)]
    pub id: String,
}

/// `200` body of a successful update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Updated {
    pub updated: bool,
}

/// `200` body of a successful unregistration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Unregistered {
    pub unregistered: bool,
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserRequestSchema,
    responses(
        (status = 201, description = "Account created", body = Registered),
        (status = 400, description = "Invalid argument", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    state.accounts.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(Registered { registered: true }))
}

/// Exchange credentials for the account id.
#[utoipa::path(
    post,
    path = "/api/auth",
    request_body = CredentialsSchema,
    responses(
        (status = 200, description = "Authenticated", body = Authenticated),
        (status = 400, description = "Invalid argument", body = ErrorSchema),
        (status = 401, description = "Wrong credentials", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "authenticateUser"
)]
#[post("/auth")]
pub async fn authenticate_user(
    state: web::Data<HttpState>,
    payload: web::Json<AuthenticateRequest>,
) -> ApiResult<web::Json<Authenticated>> {
    let id = state.login.authenticate(payload.into_inner()).await?;
    debug!(user_id = %id, "authenticated");
    Ok(web::Json(Authenticated { id: id.to_string() }))
}

/// Fetch an account profile.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Profile", body = UserProfileSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "retrieveUser"
)]
#[get("/users/{id}")]
pub async fn retrieve_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserProfile>> {
    let request = RetrieveUserRequest {
        id: Value::String(path.into_inner()),
    };
    let profile = state.profiles.retrieve(request).await?;
    Ok(web::Json(profile))
}

/// Replace credentials and profile of the account matching the current
/// credentials.
#[utoipa::path(
    patch,
    path = "/api/users",
    request_body = UpdateUserRequestSchema,
    responses(
        (status = 200, description = "Account updated", body = Updated),
        (status = 400, description = "Invalid argument", body = ErrorSchema),
        (status = 401, description = "Wrong credentials", body = ErrorSchema),
        (status = 409, description = "New email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<Updated>> {
    state.accounts.update(payload.into_inner()).await?;
    Ok(web::Json(Updated { updated: true }))
}

/// Delete an account after checking its credentials.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Account identifier")),
    request_body = CredentialsSchema,
    responses(
        (status = 200, description = "Account removed", body = Unregistered),
        (status = 400, description = "Invalid argument", body = ErrorSchema),
        (status = 401, description = "Wrong credentials", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "unregisterUser"
)]
#[delete("/users/{id}")]
pub async fn unregister_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Option<web::Json<UnregisterBody>>,
) -> ApiResult<web::Json<Unregistered>> {
    let body = payload.map(web::Json::into_inner).unwrap_or_default();
    let request = UnregisterUserRequest {
        id: Value::String(path.into_inner()),
        email: body.email,
        password: body.password,
    };
    state.accounts.unregister(request).await?;
    Ok(web::Json(Unregistered { unregistered: true }))
}

/// List the castings a user applied to, grouped by project.
#[utoipa::path(
    get,
    path = "/api/users/{id}/castings",
    params(("id" = String, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Resolved applications", body = [ResolvedApplicationSchema]),
        (status = 404, description = "Unknown user, project, or casting", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getCastings"
)]
#[get("/users/{id}/castings")]
pub async fn user_castings(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ResolvedApplication>>> {
    let request = UserCastingsRequest {
        user_id: Value::String(path.into_inner()),
    };
    let castings = state.profiles.castings(request).await?;
    Ok(web::Json(castings))
}

/// Mount every account route under the caller's scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register_user)
        .service(authenticate_user)
        .service(update_user)
        .service(user_castings)
        .service(retrieve_user)
        .service(unregister_user);
}
