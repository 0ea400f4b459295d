//! Credential primitives: bcrypt password hashing and HS256 session tokens.

mod bcrypt_password_hasher;
mod jwt_session_tokens;

pub use bcrypt_password_hasher::BcryptPasswordHasher;
pub use jwt_session_tokens::{JwtSessionTokens, SESSION_TTL, SessionClaims};
