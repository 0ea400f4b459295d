//! End-to-end account flows over the HTTP surface: signup, login, and
//! profile lookup with the issued bearer token.

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};
use vitmas::domain::EmailAddress;
use vitmas::domain::ports::UserRepository;

#[allow(dead_code, reason = "each integration test uses a subset of helpers")]
mod support;

use support::{app, in_memory_stack, signup_body};

async fn json_body(res: ServiceResponse) -> (StatusCode, Value) {
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

#[rstest]
#[case("")]
#[case("/api/auth")]
#[actix_web::test]
async fn signup_login_and_profile_round_trip(#[case] prefix: &str) {
    let stack = in_memory_stack();
    let app = test::init_service(app(stack.state.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("{prefix}/signup"))
        .set_json(signup_body("ada@example.edu"))
        .to_request();
    let (status, created) = json_body(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "User created successfully");
    let id = created["id"].as_str().expect("id").to_owned();

    let req = test::TestRequest::post()
        .uri(&format!("{prefix}/login"))
        .set_json(json!({ "email": "ada@example.edu", "password": "analytical-engine" }))
        .to_request();
    let (status, login) = json_body(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().expect("token").to_owned();

    let req = test::TestRequest::get()
        .uri(&format!("{prefix}/me"))
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let (status, profile) = json_body(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["id"], id.as_str());
    assert_eq!(profile["fullname"], "Ada Lovelace");
    assert_eq!(profile["regno"], "21BCE0001");
    assert_eq!(profile["email"], "ada@example.edu");
    assert_eq!(profile["branch"], "CSE");
    let keys: Vec<&String> = profile.as_object().expect("object").keys().collect();
    assert!(keys.iter().all(|key| !key.to_lowercase().contains("password")));
}

#[actix_web::test]
async fn password_is_stored_as_bcrypt_digest() {
    let stack = in_memory_stack();
    let app = test::init_service(app(stack.state.clone())).await;
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(signup_body("ada@example.edu"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let email = EmailAddress::new("ada@example.edu").expect("email");
    let account = stack
        .users
        .find_by_email(&email)
        .await
        .expect("store reachable")
        .expect("account stored");
    let digest = account.password_hash().as_encoded();
    assert!(digest.starts_with("$2"));
    assert_ne!(digest, "analytical-engine");
}

#[actix_web::test]
async fn duplicate_email_is_rejected() {
    let stack = in_memory_stack();
    let app = test::init_service(app(stack.state.clone())).await;
    for expected in [StatusCode::CREATED, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(signup_body("ada@example.edu"))
            .to_request();
        let (status, body) = json_body(test::call_service(&app, req).await).await;
        assert_eq!(status, expected);
        if expected == StatusCode::BAD_REQUEST {
            assert_eq!(body["message"], "User already exists");
        }
    }
    assert_eq!(stack.users.len().expect("store reachable"), 1);
}

#[actix_web::test]
async fn wrong_password_and_unknown_email_look_identical() {
    let stack = in_memory_stack();
    let app = test::init_service(app(stack.state.clone())).await;
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(signup_body("ada@example.edu"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let mut responses = Vec::new();
    for credentials in [
        json!({ "email": "ada@example.edu", "password": "difference-engine" }),
        json!({ "email": "nobody@example.edu", "password": "analytical-engine" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(credentials)
            .to_request();
        let (status, mut body) = json_body(test::call_service(&app, req).await).await;
        body.as_object_mut().expect("object").remove("traceId");
        responses.push((status, body));
    }

    let unknown = responses.pop().expect("unknown email response");
    let wrong = responses.pop().expect("wrong password response");
    assert_eq!(wrong, unknown);
    assert_eq!(wrong.0, StatusCode::BAD_REQUEST);
    assert_eq!(wrong.1["message"], "Invalid email or password");
}

#[actix_web::test]
async fn token_stops_working_after_twenty_four_hours() {
    let stack = in_memory_stack();
    let app = test::init_service(app(stack.state.clone())).await;
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(signup_body("ada@example.edu"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "ada@example.edu", "password": "analytical-engine" }))
        .to_request();
    let (_, login) = json_body(test::call_service(&app, req).await).await;
    let bearer = format!("Bearer {}", login["token"].as_str().expect("token"));

    stack.clock.advance_seconds(86_399);
    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header((AUTHORIZATION, bearer.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    stack.clock.advance_seconds(1);
    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header((AUTHORIZATION, bearer))
        .to_request();
    let (status, body) = json_body(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[rstest]
#[case(None, "Token required")]
#[case(Some("Token abc"), "Invalid token")]
#[case(Some("Bearer not.a.jwt"), "Invalid token")]
#[actix_web::test]
async fn profile_requires_a_valid_bearer_token(
    #[case] authorization: Option<&str>,
    #[case] message: &str,
) {
    let stack = in_memory_stack();
    let app = test::init_service(app(stack.state.clone())).await;
    let mut req = test::TestRequest::get().uri("/api/auth/me");
    if let Some(value) = authorization {
        req = req.insert_header((AUTHORIZATION, value));
    }
    let res = test::call_service(&app, req.to_request()).await;
    assert!(res.headers().contains_key("trace-id"));
    let (status, body) = json_body(res).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], message);
    assert!(body["traceId"].is_string());
}
