//! Infrastructure layer providing external service integrations.
//!
//! This module contains the storage backend implementations and
//! file-level concerns like CSV export and import.

pub mod persistence;
pub mod export;

pub use persistence::*;
pub use export::*;
