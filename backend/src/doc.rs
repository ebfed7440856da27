//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every account and health endpoint together with the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe
//! domain types without coupling them to utoipa. The document is served at
//! `/api-docs/openapi.json` and printed by the `openapi-dump` binary.

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CastingApplicationSchema, CastingSchema, CredentialsSchema, ErrorCodeSchema, ErrorSchema,
    PersonalDataSchema, PhysicalDataSchema, ProfessionalDataSchema, ProjectSchema,
    RegisterUserRequestSchema, ResolvedApplicationSchema, SexSchema, UpdateUserRequestSchema,
    UserProfileSchema,
};
use crate::inbound::http::users::{Authenticated, Registered, Unregistered, Updated};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CastMe user account API",
        description = "Registration, authentication, and profile management for performers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::authenticate_user,
        crate::inbound::http::users::retrieve_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::unregister_user,
        crate::inbound::http::users::user_castings,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        PersonalDataSchema,
        SexSchema,
        PhysicalDataSchema,
        ProfessionalDataSchema,
        CastingApplicationSchema,
        UserProfileSchema,
        ProjectSchema,
        CastingSchema,
        ResolvedApplicationSchema,
        RegisterUserRequestSchema,
        UpdateUserRequestSchema,
        CredentialsSchema,
        Registered,
        Authenticated,
        Updated,
        Unregistered,
    )),
    tags(
        (name = "users", description = "Account operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn every_account_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/users",
            "/api/auth",
            "/api/users/{id}",
            "/api/users/{id}/castings",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[actix_web::test]
    async fn document_is_served_as_json() {
        use actix_web::{App, test};

        let app = test::init_service(App::new().service(openapi_json)).await;
        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["info"]["title"], "CastMe user account API");
    }
}
