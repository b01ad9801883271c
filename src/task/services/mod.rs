//! Application services for the roadmap.

mod config;
mod roadmap;

pub use config::RoadmapConfig;
pub use roadmap::{RoadmapResult, RoadmapService, RoadmapServiceError};
