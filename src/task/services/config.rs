//! Configuration for the roadmap service.

use crate::task::domain::MonthCatalog;

/// Settings that shape how fetched tasks are presented.
///
/// # Examples
///
/// ```
/// use roadmap::task::services::RoadmapConfig;
///
/// let config = RoadmapConfig::default();
/// assert!(config.normalize_weekends);
/// assert_eq!(config.catalog.len(), 6);
///
/// let raw = RoadmapConfig::default().without_weekend_normalization();
/// assert!(!raw.normalize_weekends);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapConfig {
    /// Months the roadmap recognises.
    pub catalog: MonthCatalog,
    /// Whether weekend dates move to the following Monday before grouping.
    pub normalize_weekends: bool,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            catalog: MonthCatalog::reference(),
            normalize_weekends: true,
        }
    }
}

impl RoadmapConfig {
    /// Creates a configuration for a deployment-specific catalog.
    #[must_use]
    pub const fn new(catalog: MonthCatalog) -> Self {
        Self {
            catalog,
            normalize_weekends: true,
        }
    }

    /// Disables weekend normalization so stored dates display as written.
    #[must_use]
    pub const fn without_weekend_normalization(mut self) -> Self {
        self.normalize_weekends = false;
        self
    }
}
