//! Roadmap tasks: date normalization, month grouping, and editing.
//!
//! Tasks live in an external datastore. This module normalizes their
//! estimated dates, groups them into catalog months for display, and applies
//! field edits through a repository port. It follows hexagonal architecture:
//!
//! - Domain types and pure grouping logic in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
