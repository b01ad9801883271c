//! Roadmap: month-grouped product roadmap core.
//!
//! This crate turns a flat list of roadmap tasks into chronologically ordered
//! month buckets ready for display. Estimated dates that fall on a weekend
//! are moved to the following Monday before grouping, and only months present
//! in the configured catalog are shown.
//!
//! # Architecture
//!
//! Roadmap follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the task datastore
//! - **Adapters**: Concrete implementations of ports (in-memory, row mapping)
//!
//! # Modules
//!
//! - [`task`]: Date normalization, month grouping, and task edits

pub mod task;
