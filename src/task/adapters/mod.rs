//! Adapter implementations of the roadmap task ports.

pub mod memory;
pub mod record;
