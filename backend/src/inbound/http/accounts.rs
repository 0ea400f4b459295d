//! Account API handlers.
//!
//! ```text
//! POST /signup {"fullname":"Ada Lovelace","regno":"21BCE0001","email":"ada@example.edu","password":"…","branch":"CSE"}
//! POST /login {"email":"ada@example.edu","password":"…"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, LoginCredentials, SignupDetails, SignupParts};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Signup request body.
///
/// Every field is optional on the wire so absence is reported as a missing
/// field rather than a deserialisation failure.
#[derive(Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignupRequest {
    /// Full name.
    #[schema(example = "Ada Lovelace")]
    pub fullname: Option<String>,
    /// College registration number.
    #[schema(example = "21BCE0001")]
    pub regno: Option<String>,
    /// Account email, unique across users.
    #[schema(example = "ada@example.edu")]
    pub email: Option<String>,
    /// Plaintext password; only its bcrypt digest is stored.
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
    /// Academic branch.
    #[schema(example = "CSE")]
    pub branch: Option<String>,
}

impl SignupRequest {
    fn to_details(&self) -> Result<SignupDetails, Error> {
        SignupDetails::try_from_parts(SignupParts {
            full_name: self.fullname.as_deref(),
            registration_number: self.regno.as_deref(),
            email: self.email.as_deref(),
            password: self.password.as_deref(),
            branch: self.branch.as_deref(),
        })
        .map_err(Error::from)
    }
}

/// Login request body.
#[derive(Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Account email.
    #[schema(example = "ada@example.edu")]
    pub email: Option<String>,
    /// Plaintext password.
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
}

/// Body returned by a successful signup.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignupResponse {
    /// Confirmation text.
    #[schema(example = "User created successfully")]
    pub message: String,
    /// Identifier of the new account.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

/// Body returned by a successful login.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Bearer token for `Authorization` headers, valid for 24 hours.
    pub token: String,
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing field or duplicate email", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let details = payload.to_details()?;
    let id = state.accounts.signup(details).await?;
    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User created successfully".to_owned(),
        id: id.to_string(),
    }))
}

/// Exchange credentials for a session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Missing field or invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials =
        LoginCredentials::try_from_parts(payload.email.as_deref(), payload.password.as_deref())?;
    let token = state.accounts.login(credentials).await?;
    Ok(web::Json(LoginResponse {
        token: token.as_str().to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::domain::ports::FixtureAccountService;
    use crate::inbound::http::test_utils::fixture_app;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn ada() -> Value {
        json!({
            "fullname": "Ada Lovelace",
            "regno": "21BCE0001",
            "email": "ada@example.edu",
            "password": "password",
            "branch": "CSE"
        })
    }

    async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(fixture_app()).await;
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let payload: Value = actix_test::read_body_json(response).await;
        (status, payload)
    }

    #[rstest]
    #[case("/signup")]
    #[case("/api/auth/signup")]
    #[actix_web::test]
    async fn signup_returns_created_with_id(#[case] uri: &str) {
        let (status, body) = post(uri, ada()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["id"], FixtureAccountService::USER_ID);
    }

    #[rstest]
    #[case("fullname")]
    #[case("regno")]
    #[case("email")]
    #[case("password")]
    #[case("branch")]
    #[actix_web::test]
    async fn signup_without_field_is_rejected(#[case] field: &str) {
        let mut request = ada();
        request.as_object_mut().expect("object body").remove(field);
        let (status, body) = post("/signup", request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide all required fields.");
        assert_eq!(body["details"]["code"], "missing_fields");
        assert_eq!(body["details"]["field"], field);
    }

    #[actix_web::test]
    async fn signup_with_blank_field_is_rejected() {
        let mut request = ada();
        request["branch"] = json!("   ");
        let (status, body) = post("/signup", request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "branch");
    }

    #[actix_web::test]
    async fn signup_with_taken_email_is_rejected() {
        let mut request = ada();
        request["email"] = json!("taken@example.edu");
        let (status, body) = post("/api/auth/signup", request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User already exists");
        assert_eq!(body["details"]["code"], "duplicate_email");
    }

    #[rstest]
    #[case("/login")]
    #[case("/api/auth/login")]
    #[actix_web::test]
    async fn login_returns_token(#[case] uri: &str) {
        let (status, body) =
            post(uri, json!({ "email": "ada@example.edu", "password": "password" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token"], FixtureAccountService::TOKEN);
    }

    #[rstest]
    #[case(json!({ "email": "ada@example.edu", "password": "nope" }))]
    #[case(json!({ "email": "nobody@example.edu", "password": "password" }))]
    #[actix_web::test]
    async fn login_failures_are_indistinguishable(#[case] credentials: Value) {
        let (status, body) = post("/login", credentials).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email or password");
        assert_eq!(body["details"]["code"], "invalid_credentials");
    }

    #[actix_web::test]
    async fn login_without_password_is_rejected() {
        let (status, body) = post("/login", json!({ "email": "ada@example.edu" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "password");
    }

    #[actix_web::test]
    async fn malformed_body_is_a_bad_request() {
        let app = actix_test::init_service(fixture_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/signup")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "Invalid request body");
        assert_eq!(body["details"]["code"], "invalid_body");
    }
}
