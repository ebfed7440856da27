//! End-to-end account lifecycle against the in-memory document store.

use std::sync::Arc;

use castme::domain::ports::{
    AuthenticateRequest, LoginService, RegisterUserRequest, RetrieveUserRequest,
    UnregisterUserRequest, UpdateUserRequest, UserAccountCommand, UserAccountQuery,
    UserCastingsRequest, UserRepository,
};
use castme::domain::{
    Casting, CastingApplication, CastingId, Email, ErrorCode, Project, ProjectId,
    UserAccountService,
};
use castme::outbound::memory::InMemoryDocumentStore;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

type Service = UserAccountService<InMemoryDocumentStore, InMemoryDocumentStore>;

struct World {
    store: Arc<InMemoryDocumentStore>,
    service: Service,
}

#[fixture]
fn world() -> World {
    let store = Arc::new(InMemoryDocumentStore::new());
    let service = UserAccountService::new(store.clone(), store.clone());
    World { store, service }
}

fn registration(email: &str, password: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        email: json!(email),
        password: json!(password),
        personal_data: json!({
            "name": "Alex",
            "surname": "Peracaula",
            "birthDate": "1993-10-07",
            "sex": "male",
            "twins": true,
            "province": "Barcelona",
            "phone": "630075725",
        }),
        physical_data: json!({
            "height": 1.77,
            "weight": 67.0,
            "physicalCondition": "fit",
            "eyes": "green",
            "hair": "buzzed",
            "ethnicity": "caucasian",
            "beard": true,
            "tattoos": true,
            "piercings": false,
        }),
        professional_data: json!({
            "profession": "actor/actress",
            "singing": true,
            "dancing": true,
            "otherAbilities": "surfing",
            "previousJobExperiences": 20,
            "curriculum": ["The Importance of Being Earnest, TNC"],
        }),
        videobook_link: json!("https://youtube.com"),
        pics: json!([]),
    }
}

async fn login(service: &Service, email: &str, password: &str) -> Value {
    let id = service
        .authenticate(AuthenticateRequest {
            email: json!(email),
            password: json!(password),
        })
        .await
        .expect("credentials should match");
    json!(id.to_string())
}

#[rstest]
#[tokio::test]
async fn account_lifecycle(world: World) {
    let World { store, service } = world;

    service
        .register(registration(" ada@example.com ", "12345"))
        .await
        .expect("registration succeeds");
    assert_eq!(store.user_count().await, 1);

    let id = login(&service, "ada@example.com", "12345").await;
    let profile = service
        .retrieve(RetrieveUserRequest { id: id.clone() })
        .await
        .expect("profile is readable");
    assert_eq!(profile.email.as_ref(), "ada@example.com");
    assert!(profile.castings.is_empty());

    let mut update = UpdateUserRequest {
        email: json!("ada@example.com"),
        password: json!("12345"),
        new_email: json!("lovelace@example.com"),
        new_password: json!("67890"),
        ..UpdateUserRequest::default()
    };
    let details = registration("", "");
    update.personal_data = details.personal_data;
    update.physical_data = details.physical_data;
    update.professional_data = details.professional_data;
    update.videobook_link = json!("https://vimeo.com");
    update.pics = json!(["headshot.png"]);
    service.update(update).await.expect("update succeeds");

    let old_login = service
        .authenticate(AuthenticateRequest {
            email: json!("ada@example.com"),
            password: json!("12345"),
        })
        .await
        .expect_err("old credentials are gone");
    assert_eq!(old_login.code(), ErrorCode::Unauthorized);
    assert_eq!(login(&service, "lovelace@example.com", "67890").await, id);

    let profile = service
        .retrieve(RetrieveUserRequest { id: id.clone() })
        .await
        .expect("profile is readable");
    assert_eq!(profile.details.videobook_link.as_ref(), "https://vimeo.com");
    assert_eq!(profile.details.pics, vec!["headshot.png".to_owned()]);

    service
        .unregister(UnregisterUserRequest {
            id: id.clone(),
            email: json!("lovelace@example.com"),
            password: json!("67890"),
        })
        .await
        .expect("unregister succeeds");
    assert_eq!(store.user_count().await, 0);

    let gone = service
        .retrieve(RetrieveUserRequest { id })
        .await
        .expect_err("account is gone");
    assert_eq!(gone.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn client_shaped_profiles_register_and_read_back_normalised(world: World) {
    let mut request = registration("aperacaula@gmail.com", "12345");
    request.personal_data["birthDate"] = json!("1993-10-07T00:00:00.000Z");
    request.personal_data["phone"] = json!(630075725);
    request.physical_data["weight"] = json!(67);
    request.professional_data = json!({
        "profession": "actor/actress",
        "singing": true,
        "dancing": true,
        "otherHabilities": "surfing",
        "previousJobExperiences": 20,
        "curriculum": ["The Importance of Being Earnest, TNC", "Hello World, E.G.Wells"],
    });

    world
        .service
        .register(request)
        .await
        .expect("client payload registers");

    let id = login(&world.service, "aperacaula@gmail.com", "12345").await;
    let profile = world
        .service
        .retrieve(RetrieveUserRequest { id })
        .await
        .expect("profile is readable");
    let body = serde_json::to_value(&profile).expect("profile serialises");
    assert_eq!(body["personalData"]["birthDate"], "1993-10-07");
    assert_eq!(body["personalData"]["phone"], "630075725");
    assert_eq!(body["professionalData"]["otherAbilities"], "surfing");
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_a_conflict(world: World) {
    world
        .service
        .register(registration("ada@example.com", "12345"))
        .await
        .expect("first registration succeeds");

    let err = world
        .service
        .register(registration("ada@example.com", "other"))
        .await
        .expect_err("second registration fails");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "user with email ada@example.com already exists");
    assert_eq!(world.store.user_count().await, 1);
}

#[rstest]
#[tokio::test]
async fn update_cannot_take_another_users_email(world: World) {
    for email in ["ada@example.com", "grace@example.com"] {
        world
            .service
            .register(registration(email, "12345"))
            .await
            .expect("registration succeeds");
    }
    let details = registration("", "");
    let request = UpdateUserRequest {
        email: json!("ada@example.com"),
        password: json!("12345"),
        new_email: json!("grace@example.com"),
        new_password: json!("12345"),
        personal_data: details.personal_data,
        physical_data: details.physical_data,
        professional_data: details.professional_data,
        videobook_link: details.videobook_link,
        pics: details.pics,
    };

    let err = world
        .service
        .update(request)
        .await
        .expect_err("email is taken");

    assert_eq!(err.code(), ErrorCode::Conflict);
    login(&world.service, "ada@example.com", "12345").await;
}

#[rstest]
#[tokio::test]
async fn castings_resolve_projects_and_castings(world: World) {
    let World { store, service } = world;
    service
        .register(registration("ada@example.com", "12345"))
        .await
        .expect("registration succeeds");

    let hamlet = Project {
        id: ProjectId::random(),
        name: "Hamlet".to_owned(),
        details: json!({ "director": "Branagh" }),
    };
    let ophelia = Casting {
        id: CastingId::random(),
        project_id: hamlet.id,
        title: "Ophelia".to_owned(),
        details: json!({}),
    };
    store.insert_project(hamlet.clone()).await;
    store.insert_casting(ophelia.clone()).await;

    let email = Email::new("ada@example.com").expect("valid email");
    let user = store
        .find_by_email(&email)
        .await
        .expect("store is reachable")
        .expect("user exists");
    let id = json!(user.id().to_string());
    let with_application =
        user.with_application(CastingApplication::new(hamlet.id, vec![ophelia.id]));
    assert!(store.update(&with_application).await.expect("store is reachable"));

    let resolved = service
        .castings(UserCastingsRequest { user_id: id })
        .await
        .expect("castings resolve");

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].project, hamlet);
    assert_eq!(resolved[0].castings, vec![ophelia]);
}

#[rstest]
#[case(json!(null), ErrorCode::InvalidType, "user id is not a string")]
#[case(json!("   "), ErrorCode::InvalidValue, "user id is empty or blank")]
#[case(json!("not-a-uuid"), ErrorCode::NotFound, "user with id not-a-uuid does not exist")]
#[tokio::test]
async fn retrieve_rejects_bad_ids(
    world: World,
    #[case] id: Value,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let err = world
        .service
        .retrieve(RetrieveUserRequest { id })
        .await
        .expect_err("bad id");

    assert_eq!(err.code(), code);
    assert_eq!(err.message(), message);
}
