//! Port contracts for the roadmap task datastore.
//!
//! Ports define infrastructure-agnostic interfaces used by roadmap services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
