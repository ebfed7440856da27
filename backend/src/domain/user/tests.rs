//! Tests for user value types and the account entity.

use super::*;
use crate::domain::test_support;
use crate::domain::{CastingId, ProjectId};
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case("")]
#[case("not-a-uuid")]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
fn user_id_rejects_malformed_input(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
}

#[rstest]
fn user_id_accepts_canonical_uuid() {
    let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("   ", UserValidationError::EmptyEmail)]
fn email_rejects_blank(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
fn email_is_trimmed() {
    let email = Email::new("  ada@example.com\n").expect("valid email");
    assert_eq!(email.as_ref(), "ada@example.com");
}

#[rstest]
fn password_keeps_surrounding_whitespace() {
    let password = Password::new(" secret ").expect("valid password");
    assert_eq!(password.expose(), " secret ");
    assert_ne!(password, Password::new("secret").expect("valid password"));
}

#[rstest]
fn password_debug_is_redacted() {
    let password = Password::new("hunter2").expect("valid password");
    assert!(!format!("{password:?}").contains("hunter2"));
}

#[rstest]
fn registered_user_has_no_castings() {
    let user = test_support::user();
    assert!(user.castings().is_empty());
    assert_eq!(user.email().as_ref(), test_support::EMAIL);
}

#[rstest]
#[case(test_support::EMAIL, test_support::PASSWORD, true)]
#[case(test_support::EMAIL, "54321", false)]
#[case(test_support::OTHER_EMAIL, test_support::PASSWORD, false)]
fn has_credentials_requires_both_to_match(
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: bool,
) {
    let user = test_support::user();
    let email = Email::new(email).expect("email");
    let password = Password::new(password).expect("password");
    assert_eq!(user.has_credentials(&email, &password), expected);
}

#[rstest]
fn with_changes_keeps_identity_and_castings() {
    let application = CastingApplication::new(ProjectId::random(), vec![CastingId::random()]);
    let user = test_support::user().with_application(application.clone());
    let id = *user.id();

    let changed = user.with_changes(
        Email::new("jd@mail.com").expect("email"),
        Password::new("123").expect("password"),
        test_support::details(),
    );

    assert_eq!(changed.id(), &id);
    assert_eq!(changed.email().as_ref(), "jd@mail.com");
    assert_eq!(changed.password().expose(), "123");
    assert_eq!(changed.castings(), [application]);
}

#[rstest]
fn profile_omits_id_and_password() {
    let user = test_support::user();
    let value = serde_json::to_value(user.profile()).expect("profile serialises");
    let object = value.as_object().expect("profile is an object");

    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("_id"));
    assert!(!object.contains_key("password"));
    assert_eq!(object.get("email").and_then(Value::as_str), Some(test_support::EMAIL));
    assert_eq!(object.get("castings"), Some(&Value::Array(Vec::new())));
    assert!(object.contains_key("personalData"));
    assert_eq!(
        object.get("videobookLink").and_then(Value::as_str),
        Some("https://youtube.com")
    );
}
