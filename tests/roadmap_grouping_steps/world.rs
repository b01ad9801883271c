//! Shared world state for roadmap grouping BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use roadmap::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{MonthGrouping, Task},
    services::{RoadmapResult, RoadmapService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestRoadmapService = RoadmapService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for roadmap grouping behaviour tests.
pub struct RoadmapWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub service: TestRoadmapService,
    pub grouping: Option<MonthGrouping>,
    pub last_edit: Option<RoadmapResult<Task>>,
}

impl RoadmapWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let service = RoadmapService::new(Arc::clone(&repository), Arc::new(DefaultClock));

        Self {
            repository,
            service,
            grouping: None,
            last_edit: None,
        }
    }

    /// Returns the grouping produced by the last `When` step.
    pub fn grouping(&self) -> Result<&MonthGrouping, eyre::Report> {
        self.grouping
            .as_ref()
            .ok_or_else(|| eyre::eyre!("roadmap has not been grouped in this scenario"))
    }
}

impl Default for RoadmapWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RoadmapWorld {
    RoadmapWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
