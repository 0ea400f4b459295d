//! Profile API handler and bearer-token extraction.
//!
//! ```text
//! GET /me
//! Authorization: Bearer <token>
//! ```

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, get, web};
use futures_util::future::{Ready, ready};

use crate::domain::{BearerToken, Error, Rejection, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Extractor yielding the bearer token of the `Authorization` header.
///
/// Absent or empty headers fail with `Token required`; any other scheme, or
/// a header that is not valid UTF-8, fails with `Invalid token`. Both map to
/// `401 Unauthorized`.
pub struct BearerAuth(BearerToken);

impl BearerAuth {
    /// The extracted token.
    #[must_use]
    pub const fn token(&self) -> &BearerToken {
        &self.0
    }
}

fn bearer_from_request(req: &HttpRequest) -> Result<BearerToken, Rejection> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| Rejection::InvalidToken))
        .transpose()?;
    BearerToken::from_authorization(header)
}

impl FromRequest for BearerAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(bearer_from_request(req).map(Self).map_err(Error::from))
    }
}

/// Fetch the profile of the token's subject.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Authenticated user's profile", body = UserSchema),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "currentUser",
    security(("bearer" = []))
)]
#[get("/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    auth: BearerAuth,
) -> ApiResult<web::Json<User>> {
    let user = state.profile.fetch_profile(auth.token()).await?;
    Ok(web::Json(user))
}
