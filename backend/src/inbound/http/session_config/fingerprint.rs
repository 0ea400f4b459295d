//! Signing-secret fingerprinting for operational visibility.
//!
//! A truncated SHA-256 of the secret lets operators confirm which secret a
//! process loaded without the secret itself reaching the logs.

use sha2::{Digest, Sha256};

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// First 8 bytes of the secret's SHA-256, as 16 lowercase hex characters.
///
/// # Examples
///
/// ```rust
/// use vitmas::inbound::http::session_config::fingerprint::secret_fingerprint;
///
/// let fp = secret_fingerprint(b"0123456789abcdef0123456789abcdef");
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn secret_fingerprint(secret: &[u8]) -> String {
    let digest = Sha256::digest(secret);
    hex::encode(digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fingerprint_is_deterministic() {
        assert_eq!(secret_fingerprint(&[b'a'; 32]), secret_fingerprint(&[b'a'; 32]));
    }

    #[rstest]
    fn different_secrets_produce_different_fingerprints() {
        assert_ne!(secret_fingerprint(&[b'a'; 32]), secret_fingerprint(&[b'b'; 32]));
    }

    #[rstest]
    fn fingerprint_matches_known_digest_prefix() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(secret_fingerprint(b"abc"), "ba7816bf8f01cfea");
    }
}
