//! Registered user model.
//!
//! [`User`] is the sanitised view returned to clients and has no password
//! field at all; [`UserAccount`] pairs it with the stored [`PasswordHash`] and
//! never leaves the service boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for user value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifier was blank.
    #[error("user id must not be empty")]
    EmptyId,
    /// Identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// Email was blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Stable user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a [`UserId`] from its hyphenated string form.
    ///
    /// # Examples
    /// ```
    /// use vitmas::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("not-a-uuid").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address used as the unique account key.
///
/// Only surrounding whitespace is removed; the address is otherwise compared
/// exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Construct an address from raw input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque password digest in the hasher's self-describing format.
///
/// `Debug` is redacted so digests never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded digest produced by a password hasher or read from the
    /// store.
    #[must_use]
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded digest, for persistence adapters.
    #[must_use]
    pub fn as_encoded(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Sanitised user profile.
///
/// Serialises with the same field names the signup form submits.
///
/// # Examples
/// ```
/// use vitmas::domain::{EmailAddress, User, UserId};
///
/// let user = User::new(
///     UserId::random(),
///     "Ada Lovelace",
///     "21BCE0001",
///     EmailAddress::new("ada@example.edu").unwrap(),
///     "CSE",
/// );
/// let json = serde_json::to_value(&user).unwrap();
/// assert_eq!(json["fullname"], "Ada Lovelace");
/// assert!(json.get("password").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(rename = "fullname")]
    full_name: String,
    #[serde(rename = "regno")]
    registration_number: String,
    email: EmailAddress,
    branch: String,
}

impl User {
    /// Build a user from validated parts.
    #[must_use]
    pub fn new(
        id: UserId,
        full_name: impl Into<String>,
        registration_number: impl Into<String>,
        email: EmailAddress,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            registration_number: registration_number.into(),
            email,
            branch: branch.into(),
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Full name as submitted at signup.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// College registration number.
    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    /// Unique account key.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Academic branch.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

/// Stored credential record: a [`User`] plus its password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    user: User,
    password_hash: PasswordHash,
}

impl UserAccount {
    /// Pair a profile with its digest.
    #[must_use]
    pub const fn new(user: User, password_hash: PasswordHash) -> Self {
        Self {
            user,
            password_hash,
        }
    }

    /// Client-safe profile.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Stored password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Drop the digest, keeping only the client-safe profile.
    #[must_use]
    pub fn into_user(self) -> User {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case("not-a-uuid", UserValidationError::InvalidId)]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
    fn user_id_rejects_malformed_input(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }

    #[rstest]
    #[case("  ada@example.edu ", "ada@example.edu")]
    #[case("Ada@Example.edu", "Ada@Example.edu")]
    fn email_is_trimmed_but_otherwise_preserved(#[case] raw: &str, #[case] expected: &str) {
        let email = EmailAddress::new(raw).expect("valid email");
        assert_eq!(email.as_str(), expected);
    }

    #[rstest]
    fn blank_email_is_rejected() {
        assert_eq!(EmailAddress::new("   "), Err(UserValidationError::EmptyEmail));
    }

    #[rstest]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::from_encoded("$2b$10$abcdefghijklmnopqrstuv");
        assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
    }

    #[rstest]
    fn user_serialises_form_field_names() {
        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("id");
        let user = User::new(
            id,
            "Ada Lovelace",
            "21BCE0001",
            EmailAddress::new("ada@example.edu").expect("email"),
            "CSE",
        );
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            serde_json::json!({
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "fullname": "Ada Lovelace",
                "regno": "21BCE0001",
                "email": "ada@example.edu",
                "branch": "CSE",
            })
        );
    }
}
