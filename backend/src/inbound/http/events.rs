//! Event registration handler.
//!
//! ```text
//! POST /register {"domainpref":"web","event":"hackathon"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::NewEventRegistration;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration request body.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    /// Preferred domain, free text.
    #[schema(example = "web")]
    pub domainpref: Option<String>,
    /// Event name, free text.
    #[schema(example = "hackathon")]
    pub event: Option<String>,
}

/// Body returned once a registration is stored.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    /// Confirmation text.
    #[schema(example = "Registration successful!")]
    pub message: String,
}

/// Record an event registration. No authentication is required.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration stored", body = RegisterResponse),
        (status = 400, description = "Missing field", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "registerForEvent",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let request =
        NewEventRegistration::try_from_parts(payload.domainpref.as_deref(), payload.event.as_deref())?;
    state.events.register(request).await?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Registration successful!".to_owned(),
    }))
}
