//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled only for tests or with the `test-support` feature.

pub mod clock;

pub mod secrets {
    //! Signing-secret fixtures.

    use std::io::{self, Write};

    use tempfile::NamedTempFile;

    /// A secret long enough for release-mode validation.
    pub const SIGNING_SECRET: &str = "0123456789abcdef0123456789abcdef-test-signing-secret";

    /// Write `secret` to a fresh temporary file.
    ///
    /// The file is removed when the returned handle drops.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures creating or writing the file.
    pub fn secret_file(secret: &[u8]) -> io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(secret)?;
        file.flush()?;
        Ok(file)
    }
}

pub mod openapi {
    //! OpenAPI schema traversal helpers.

    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::{Object, Schema};

    /// Extract an `Object` schema.
    ///
    /// # Panics
    ///
    /// Panics with a diagnostic when `schema` is a reference or not an object.
    #[must_use]
    pub fn unwrap_object_schema<'a>(schema: &'a RefOr<Schema>, name: &str) -> &'a Object {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj,
            RefOr::Ref(reference) => {
                panic!(
                    "schema '{name}' is a $ref to '{}'; resolve the reference first",
                    reference.ref_location
                );
            }
            _ => panic!("schema '{name}' is not an Object"),
        }
    }
}
