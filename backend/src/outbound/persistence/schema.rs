//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes the schema, regenerate with `diesel print-schema`.

diesel::table! {
    /// Registered accounts.
    ///
    /// `email` carries a unique index; concurrent signups for one address are
    /// arbitrated by it.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        full_name -> Varchar,
        registration_number -> Varchar,
        /// Unique account key, stored trimmed.
        email -> Varchar,
        /// Self-describing bcrypt digest.
        password_hash -> Varchar,
        branch -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only event sign-ups.
    event_registrations (id) {
        id -> Uuid,
        domain_preference -> Varchar,
        event_name -> Varchar,
        /// Server-observed registration time.
        registered_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, event_registrations);
