//! apptrack - Job Application Tracker Library
//!
//! A small state container for tracking job applications: CRUD over an
//! ordered record sequence, mirrored to key-value storage on every
//! mutation, with derived status counts.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
pub use application::*;
