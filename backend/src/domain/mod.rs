//! Domain primitives, services, and ports.
//!
//! Purpose: define the account, session, and event-registration model used
//! by the HTTP and persistence adapters. Types are immutable once built and
//! document their invariants and serde contracts in their Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Rejection: client-caused failures with fixed messages.
//! - User / UserAccount: sanitised profile and stored credential record.
//! - AccountServiceImpl, UserProfileService, EventRegistrationService:
//!   driving-port implementations.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod event_registration;
pub mod event_registration_service;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_profile_service;

pub use self::account_service::AccountServiceImpl;
pub use self::auth::{
    BearerToken, LoginCredentials, MISSING_FIELDS_MESSAGE, Rejection, SessionToken,
    SignupDetails, SignupParts,
};
pub use self::error::{DomainError as Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::event_registration::{EventRegistration, NewEventRegistration};
pub use self::event_registration_service::EventRegistrationService;
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, PasswordHash, User, UserAccount, UserId, UserValidationError};
pub use self::user_profile_service::UserProfileService;

