//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed stores using Diesel ORM
//! - **memory**: process-local stores for development and tests
//! - **credentials**: bcrypt password hashing and HS256 session tokens
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod credentials;
pub mod memory;
pub mod persistence;
