//! Application layer owning the store and its operations.
//!
//! This module coordinates between the domain layer and the storage
//! backends, exposing the mutating operations and the derived views the
//! presentation layer consumes.

pub mod store;

pub use store::*;
