//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn failures into consistent JSON bodies and status codes. Internal and
//! service-unavailable errors are logged in full and returned redacted.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redacted_message(code: ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::InternalError => Some("Internal server error"),
        ErrorCode::ServiceUnavailable => Some("Service unavailable"),
        ErrorCode::InvalidRequest | ErrorCode::Unauthorized | ErrorCode::NotFound => None,
    }
}

fn redact(error: &Error) -> Error {
    let Some(message) = redacted_message(error.code()) else {
        return error.clone();
    };
    let mut public = Error::new(error.code(), message);
    if let Some(id) = error.trace_id() {
        public = public.with_trace_id(id.to_owned());
    }
    public
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if redacted_message(self.code()).is_some() {
            error!(trace_id = ?self.trace_id(), error = %self, "request failed");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact(self))
    }
}

/// `JsonConfig` error handler turning unreadable bodies into `400` payloads.
///
/// Only the failure category is reported; body content is never echoed.
#[must_use]
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let reason = body_error_reason(&err);
    warn!(reason, "rejected request body");
    Error::invalid_request("Invalid request body")
        .with_details(json!({ "code": "invalid_body", "reason": reason }))
        .into()
}

fn body_error_reason(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "content_type",
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "too_large"
        }
        _ => "malformed",
    }
}
