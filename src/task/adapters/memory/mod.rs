//! In-memory adapters for tests and local development.

mod task;

pub use task::InMemoryTaskRepository;
