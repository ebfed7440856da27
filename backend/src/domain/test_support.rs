//! Sample account data shared by domain unit tests.

use serde_json::{Value, json};

use super::{Email, Password, User, UserDetails};

pub(crate) const EMAIL: &str = "aperacaula@gmail.com";
pub(crate) const OTHER_EMAIL: &str = "apr1993@hotmail.com";
pub(crate) const PASSWORD: &str = "12345";

pub(crate) fn personal_data() -> Value {
    json!({
        "name": "Alex",
        "surname": "Peracaula",
        "birthDate": "1993-10-07",
        "sex": "male",
        "twins": true,
        "province": "Barcelona",
        "phone": "630075725",
    })
}

pub(crate) fn physical_data() -> Value {
    json!({
        "height": 1.77,
        "weight": 67.0,
        "physicalCondition": "fit",
        "eyes": "green",
        "hair": "buzzed",
        "ethnicity": "caucasian",
        "beard": true,
        "tattoos": true,
        "piercings": false,
    })
}

pub(crate) fn professional_data() -> Value {
    json!({
        "profession": "actor/actress",
        "singing": true,
        "dancing": true,
        "otherAbilities": "surfing",
        "previousJobExperiences": 20,
        "curriculum": ["The Importance of Being Earnest, TNC", "Hello World, E.G.Wells"],
    })
}

pub(crate) fn details() -> UserDetails {
    serde_json::from_value(json!({
        "personalData": personal_data(),
        "physicalData": physical_data(),
        "professionalData": professional_data(),
        "videobookLink": "https://youtube.com",
        "pics": [],
    }))
    .expect("sample details are well formed")
}

pub(crate) fn user_with(email: &str, password: &str) -> User {
    User::register(
        Email::new(email).expect("sample email"),
        Password::new(password).expect("sample password"),
        details(),
    )
}

pub(crate) fn user() -> User {
    user_with(EMAIL, PASSWORD)
}
