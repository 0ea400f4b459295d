//! HS256 session tokens over `jsonwebtoken`.
//!
//! Claims are `{id, iat, exp}`. Expiry is checked here against the injected
//! clock with zero leeway rather than by `jsonwebtoken`, which reads the
//! system time directly.

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::{SessionTokenError, SessionTokens};
use crate::domain::{SessionToken, UserId};

/// Lifetime of an issued token.
pub const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Signed token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject user id.
    pub id: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// [`SessionTokens`] signing with a process-wide HMAC secret.
#[derive(Clone)]
pub struct JwtSessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtSessionTokens {
    /// Build an issuer for `secret` with the default [`SESSION_TTL`].
    #[must_use]
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl: SESSION_TTL,
            clock,
        }
    }

    /// Override the token lifetime.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    fn ttl_seconds(&self) -> i64 {
        i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl SessionTokens for JwtSessionTokens {
    fn issue(&self, subject: &UserId) -> Result<SessionToken, SessionTokenError> {
        let iat = self.clock.utc().timestamp();
        let claims = SessionClaims {
            id: subject.to_string(),
            iat,
            exp: iat.saturating_add(self.ttl_seconds()),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map(SessionToken::new)
            .map_err(|err| SessionTokenError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserId, SessionTokenError> {
        let claims = decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                debug!(kind = ?err.kind(), "session token rejected");
                SessionTokenError::invalid()
            })?;

        if claims.exp <= self.clock.utc().timestamp() {
            debug!("session token expired");
            return Err(SessionTokenError::invalid());
        }

        UserId::new(&claims.id).map_err(|_| SessionTokenError::invalid())
    }
}
