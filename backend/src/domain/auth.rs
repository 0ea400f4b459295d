//! Authentication primitives: signup details, login credentials, bearer
//! tokens and the client-facing rejection taxonomy.
//!
//! Inbound adapters hand raw, possibly absent, strings to the constructors
//! here; the only validation applied is presence.

use std::fmt;

use serde_json::json;
use zeroize::Zeroizing;

use super::{EmailAddress, Error};

/// Message shared by every presence failure.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide all required fields.";

/// Client-caused failures with fixed, enumeration-safe messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Signup found an existing account with the same email.
    #[error("User already exists")]
    DuplicateEmail,
    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// No bearer token accompanied a protected request.
    #[error("Token required")]
    MissingToken,
    /// The bearer token failed signature, structure, or expiry checks.
    #[error("Invalid token")]
    InvalidToken,
    /// A required field was absent or blank.
    #[error("Please provide all required fields.")]
    MissingFields {
        /// Wire name of the first missing field.
        field: &'static str,
    },
}

impl Rejection {
    /// Snake-case name reported in `details.code`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidCredentials => "invalid_credentials",
            Self::MissingToken => "missing_token",
            Self::InvalidToken => "invalid_token",
            Self::MissingFields { .. } => "missing_fields",
        }
    }
}

impl From<Rejection> for Error {
    fn from(value: Rejection) -> Self {
        let message = value.to_string();
        let error = match value {
            Rejection::MissingToken | Rejection::InvalidToken => Self::unauthorized(message),
            Rejection::DuplicateEmail
            | Rejection::InvalidCredentials
            | Rejection::MissingFields { .. } => Self::invalid_request(message),
        };
        let details = match value {
            Rejection::MissingFields { field } => json!({ "code": value.code(), "field": field }),
            _ => json!({ "code": value.code() }),
        };
        error.with_details(details)
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, Rejection> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(raw),
        _ => Err(Rejection::MissingFields { field }),
    }
}

fn required_email(value: Option<&str>) -> Result<EmailAddress, Rejection> {
    EmailAddress::new(required("email", value)?)
        .map_err(|_| Rejection::MissingFields { field: "email" })
}

/// Details submitted at signup.
///
/// ## Invariants
/// - Every field is present and non-blank; text fields are trimmed.
/// - `password` keeps caller whitespace and is zeroised on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupDetails {
    full_name: String,
    registration_number: String,
    email: EmailAddress,
    password: Zeroizing<String>,
    branch: String,
}

/// Raw signup inputs as received from a transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignupParts<'a> {
    /// Submitted as `fullname`.
    pub full_name: Option<&'a str>,
    /// Submitted as `regno`.
    pub registration_number: Option<&'a str>,
    /// Account email; becomes the unique key.
    pub email: Option<&'a str>,
    /// Plaintext password.
    pub password: Option<&'a str>,
    /// Academic branch.
    pub branch: Option<&'a str>,
}

impl SignupDetails {
    /// Validate presence of every signup field, reporting the first missing
    /// one by its wire name.
    ///
    /// # Examples
    /// ```
    /// use vitmas::domain::{Rejection, SignupDetails, SignupParts};
    ///
    /// let parts = SignupParts {
    ///     full_name: Some("Ada Lovelace"),
    ///     registration_number: Some("21BCE0001"),
    ///     email: Some("ada@example.edu"),
    ///     password: None,
    ///     branch: Some("CSE"),
    /// };
    /// assert_eq!(
    ///     SignupDetails::try_from_parts(parts).unwrap_err(),
    ///     Rejection::MissingFields { field: "password" },
    /// );
    /// ```
    pub fn try_from_parts(parts: SignupParts<'_>) -> Result<Self, Rejection> {
        let full_name = required("fullname", parts.full_name)?.trim().to_owned();
        let registration_number = required("regno", parts.registration_number)?
            .trim()
            .to_owned();
        let email = required_email(parts.email)?;
        let password = Zeroizing::new(required("password", parts.password)?.to_owned());
        let branch = required("branch", parts.branch)?.trim().to_owned();
        Ok(Self {
            full_name,
            registration_number,
            email,
            password,
            branch,
        })
    }

    /// Trimmed full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Trimmed registration number.
    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    /// Account email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password; hand it to the hasher and nowhere else.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Trimmed academic branch.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

impl fmt::Debug for SignupDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupDetails")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Validated login credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(
        raw_email: Option<&str>,
        raw_password: Option<&str>,
    ) -> Result<Self, Rejection> {
        Ok(Self {
            email: required_email(raw_email)?,
            password: Zeroizing::new(required("password", raw_password)?.to_owned()),
        })
    }

    /// Account email to look up.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password to verify.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed session token handed to clients after login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an encoded token.
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Bearer token extracted from an `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Parse an `Authorization` header value.
    ///
    /// A missing header or an empty credential is [`Rejection::MissingToken`];
    /// any scheme other than `Bearer` (case-insensitive) is
    /// [`Rejection::InvalidToken`].
    ///
    /// # Examples
    /// ```
    /// use vitmas::domain::{BearerToken, Rejection};
    ///
    /// let token = BearerToken::from_authorization(Some("Bearer abc.def.ghi")).unwrap();
    /// assert_eq!(token.as_str(), "abc.def.ghi");
    /// assert_eq!(BearerToken::from_authorization(None).unwrap_err(), Rejection::MissingToken);
    /// ```
    pub fn from_authorization(header: Option<&str>) -> Result<Self, Rejection> {
        let value = header.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(Rejection::MissingToken);
        }
        let (scheme, rest) = value.split_once(' ').unwrap_or((value, ""));
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(Rejection::InvalidToken);
        }
        let credential = rest.trim();
        if credential.is_empty() {
            return Err(Rejection::MissingToken);
        }
        Ok(Self(Zeroizing::new(credential.to_owned())))
    }

    /// Raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}
