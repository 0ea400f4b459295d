//! Signing-secret configuration for bearer sessions.
//!
//! The HMAC secret comes from `JWT_SECRET`, or from the file named by
//! `JWT_SECRET_FILE` (which wins when both are set). An absent or empty secret
//! always fails startup; release builds also reject secrets shorter than
//! [`SECRET_MIN_LEN`] bytes.

pub mod fingerprint;

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

pub(crate) const SECRET_ENV: &str = "JWT_SECRET";
pub(crate) const SECRET_FILE_ENV: &str = "JWT_SECRET_FILE";

/// Minimum secret length accepted by release builds.
pub const SECRET_MIN_LEN: usize = 32;

/// Build mode for secret validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds warn about short secrets.
    Debug,
    /// Release builds reject short secrets.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vitmas::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub const fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Where the secret was read from, for startup logging.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SecretSource {
    /// `JWT_SECRET`.
    Env,
    /// The file named by `JWT_SECRET_FILE`.
    File(PathBuf),
}

/// Validated session settings.
pub struct SessionSettings {
    secret: Zeroizing<Vec<u8>>,
    source: SecretSource,
}

impl SessionSettings {
    /// HMAC signing secret.
    #[must_use]
    pub fn secret(&self) -> &[u8] {
        self.secret.as_slice()
    }

    /// Where the secret came from.
    #[must_use]
    pub const fn source(&self) -> &SecretSource {
        &self.source
    }

    /// Log-safe fingerprint of the secret.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        fingerprint::secret_fingerprint(self.secret())
    }
}

/// Errors raised while loading the signing secret.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// Neither `JWT_SECRET` nor `JWT_SECRET_FILE` is set.
    #[error("missing signing secret: set JWT_SECRET or JWT_SECRET_FILE")]
    MissingSecret,
    /// The secret is present but empty.
    #[error("signing secret from {origin} is empty")]
    EmptySecret {
        /// Variable name or file path the secret came from.
        origin: String,
    },
    /// Reading the secret file failed.
    #[error("failed to read signing secret at {path}: {source}")]
    SecretRead {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Release builds require at least [`SECRET_MIN_LEN`] bytes.
    #[error("signing secret too short: need >= {min_len} bytes, got {length}")]
    SecretTooShort {
        /// Bytes supplied.
        length: usize,
        /// Bytes required.
        min_len: usize,
    },
}

/// Load the signing secret from the environment.
///
/// # Errors
///
/// Returns [`SessionConfigError`] when no secret is configured, the file
/// cannot be read, or the secret fails validation for `mode`.
///
/// # Examples
///
/// ```rust
/// use mockable::MockEnv;
/// use vitmas::inbound::http::session_config::{BuildMode, session_settings_from_env};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "JWT_SECRET" => Some("0123456789abcdef0123456789abcdef".to_owned()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release)?;
/// assert_eq!(settings.secret().len(), 32);
/// # Ok(())
/// # }
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let file = env.string(SECRET_FILE_ENV).filter(|path| !path.is_empty());
    let inline = env.string(SECRET_ENV).map(|value| Zeroizing::new(value.into_bytes()));

    let (secret, source) = match (file, inline) {
        (Some(raw_path), also_inline) => {
            if also_inline.is_some() {
                warn!("both {SECRET_ENV} and {SECRET_FILE_ENV} set; using the file");
            }
            let secret_path = PathBuf::from(raw_path);
            (read_secret_file(&secret_path)?, SecretSource::File(secret_path))
        }
        (None, Some(value)) => (value, SecretSource::Env),
        (None, None) => return Err(SessionConfigError::MissingSecret),
    };

    validate_secret(&secret, &source, mode)?;
    Ok(SessionSettings { secret, source })
}

fn validate_secret(
    secret: &[u8],
    source: &SecretSource,
    mode: BuildMode,
) -> Result<(), SessionConfigError> {
    if secret.is_empty() {
        let origin = match source {
            SecretSource::Env => SECRET_ENV.to_owned(),
            SecretSource::File(path) => path.display().to_string(),
        };
        return Err(SessionConfigError::EmptySecret { origin });
    }
    if secret.len() < SECRET_MIN_LEN {
        if mode == BuildMode::Release {
            return Err(SessionConfigError::SecretTooShort {
                length: secret.len(),
                min_len: SECRET_MIN_LEN,
            });
        }
        warn!(
            length = secret.len(),
            min_len = SECRET_MIN_LEN,
            "signing secret shorter than recommended (dev only)"
        );
    }
    Ok(())
}

/// Read a secret file through `cap_std`, dropping one trailing line ending.
fn read_secret_file(path: &Path) -> Result<Zeroizing<Vec<u8>>, SessionConfigError> {
    let read_error = |source| SessionConfigError::SecretRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        read_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let mut bytes = Zeroizing::new(dir.read(file_name).map_err(read_error)?);
    if bytes.ends_with(b"\n") {
        bytes.pop();
        if bytes.ends_with(b"\r") {
            bytes.pop();
        }
    }
    Ok(bytes)
}
