//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{event_registrations, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub full_name: String,
    pub registration_number: String,
    pub email: String,
    pub password_hash: String,
    pub branch: String,
}

/// Insertable struct for creating new user records.
///
/// `created_at` is filled by the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub registration_number: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub branch: &'a str,
}

/// Insertable struct for event registrations.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = event_registrations)]
pub(crate) struct NewEventRegistrationRow<'a> {
    pub id: Uuid,
    pub domain_preference: &'a str,
    pub event_name: &'a str,
    pub registered_at: DateTime<Utc>,
}
