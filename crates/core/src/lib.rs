//! gobank core - account domain entities, services, and traits.
//!
//! This crate is database-agnostic. It defines the repository contract that
//! the `storage-sqlite` crate implements, and ships an in-memory store used
//! for tests and for running the server without a database file.

pub mod accounts;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
