//! Step definitions for roadmap grouping scenarios.

mod given;
mod then;
pub mod world;
