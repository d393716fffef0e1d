//! Folio Core - domain entities, services, and traits.
//!
//! This crate contains the business logic for the Folio portfolio tracker.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod portfolio;
pub mod returns;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
