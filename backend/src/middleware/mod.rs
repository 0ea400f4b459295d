//! Request middleware.
//!
//! Request lifecycle concerns that wrap every route, such as trace
//! correlation.

pub mod trace;

pub use trace::Trace;
