//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and are registered under the domain
//! names, so handlers reference them in `utoipa::path` annotations.

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// An argument was not of the expected kind.
    #[schema(rename = "invalid_type")]
    InvalidType,
    /// A string argument was empty or blank.
    #[schema(rename = "invalid_value")]
    InvalidValue,
    /// Credentials did not match.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The referenced document does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The email is already registered.
    #[schema(rename = "conflict")]
    Conflict,
    /// The document store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// API error response payload.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_value")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "user email is empty or blank")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// Personal details of a performer.
#[derive(ToSchema)]
#[schema(as = PersonalData, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PersonalDataSchema {
    #[schema(example = "Alex")]
    name: String,
    #[schema(example = "Peracaula")]
    surname: String,
    #[schema(value_type = String, format = Date, example = "1993-10-07")]
    birth_date: String,
    #[schema(example = "male")]
    sex: SexSchema,
    twins: bool,
    #[schema(example = "Barcelona")]
    province: String,
    #[schema(example = "630075725")]
    phone: String,
}

/// Declared sex.
#[derive(ToSchema)]
#[schema(as = Sex)]
pub enum SexSchema {
    #[schema(rename = "male")]
    Male,
    #[schema(rename = "female")]
    Female,
    #[schema(rename = "other")]
    Other,
}

/// Physical appearance.
#[derive(ToSchema)]
#[schema(as = PhysicalData, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PhysicalDataSchema {
    /// Metres.
    #[schema(example = 1.77)]
    height: f64,
    /// Kilograms.
    #[schema(example = 67.0)]
    weight: f64,
    physical_condition: String,
    eyes: String,
    hair: String,
    ethnicity: String,
    beard: bool,
    tattoos: bool,
    piercings: bool,
}

/// Professional background.
#[derive(ToSchema)]
#[schema(as = ProfessionalData, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ProfessionalDataSchema {
    #[schema(example = "actor/actress")]
    profession: String,
    singing: bool,
    dancing: bool,
    other_abilities: String,
    #[schema(minimum = 0)]
    previous_job_experiences: u32,
    curriculum: Vec<String>,
}

/// A user's application to castings of one project.
#[derive(ToSchema)]
#[schema(as = CastingApplication)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CastingApplicationSchema {
    #[schema(value_type = String, format = Uuid)]
    project: String,
    #[schema(value_type = Vec<String>)]
    castings: Vec<String>,
}

/// Account profile without id and password.
#[derive(ToSchema)]
#[schema(as = UserProfile, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserProfileSchema {
    #[schema(example = "aperacaula@gmail.com")]
    email: String,
    personal_data: PersonalDataSchema,
    physical_data: PhysicalDataSchema,
    professional_data: ProfessionalDataSchema,
    #[schema(example = "https://youtube.com")]
    videobook_link: String,
    pics: Vec<String>,
    castings: Vec<CastingApplicationSchema>,
}

/// Production document.
#[derive(ToSchema)]
#[schema(as = Project)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ProjectSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    name: String,
    details: serde_json::Value,
}

/// Casting document.
#[derive(ToSchema)]
#[schema(as = Casting, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CastingSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(value_type = String, format = Uuid)]
    project_id: String,
    title: String,
    details: serde_json::Value,
}

/// Application with its project and castings resolved.
#[derive(ToSchema)]
#[schema(as = ResolvedApplication)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ResolvedApplicationSchema {
    project: ProjectSchema,
    castings: Vec<CastingSchema>,
}

/// Registration arguments. Every field is validated server-side.
#[derive(ToSchema)]
#[schema(as = RegisterUserRequest, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct RegisterUserRequestSchema {
    #[schema(example = "aperacaula@gmail.com")]
    email: String,
    #[schema(example = "12345")]
    password: String,
    personal_data: PersonalDataSchema,
    physical_data: PhysicalDataSchema,
    professional_data: ProfessionalDataSchema,
    videobook_link: String,
    pics: Vec<String>,
}

/// Update arguments: current credentials plus the full replacement profile.
#[derive(ToSchema)]
#[schema(as = UpdateUserRequest, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UpdateUserRequestSchema {
    email: String,
    password: String,
    new_email: String,
    new_password: String,
    personal_data: PersonalDataSchema,
    physical_data: PhysicalDataSchema,
    professional_data: ProfessionalDataSchema,
    videobook_link: String,
    pics: Vec<String>,
}

/// Email and password pair.
#[derive(ToSchema)]
#[schema(as = Credentials)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CredentialsSchema {
    #[schema(example = "aperacaula@gmail.com")]
    email: String,
    #[schema(example = "12345")]
    password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> serde_json::Value {
        serde_json::to_value(T::schema()).expect("schema serialises")
    }

    #[test]
    fn error_schema_uses_camel_case() {
        let schema = schema_json::<ErrorSchema>();
        let properties = &schema["properties"];
        assert!(properties.get("traceId").is_some());
        assert!(properties.get("trace_id").is_none());
    }

    #[test]
    fn error_codes_match_wire_names() {
        let schema = schema_json::<ErrorCodeSchema>();
        let values = schema["enum"].as_array().expect("enum values");
        assert!(values.contains(&serde_json::json!("invalid_type")));
        assert!(values.contains(&serde_json::json!("conflict")));
    }

    #[test]
    fn profile_schema_omits_password() {
        let schema = schema_json::<UserProfileSchema>();
        assert!(schema["properties"].get("password").is_none());
        assert!(schema["properties"].get("videobookLink").is_some());
    }
}
