//! Shared test helpers for in-memory roadmap integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use roadmap::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskId, services::RoadmapService,
};
use rstest::fixture;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

/// Service type used by the integration tests.
pub type TestService = RoadmapService<InMemoryTaskRepository, DefaultClock>;

/// Datastore rows covering every catalog month, a weekend, and stray rows.
pub const SEED_ROWS: &str = r#"[
    {
        "id": "july-10",
        "title": "Review Clock In and Out Flow",
        "description": "Walk through the shift start and end screens",
        "value": "Accurate time tracking",
        "who_uses": "Promoters and Sales reps",
        "user_types": ["Promoters", "Sales Reps"],
        "examples": "[\"Late clock-in\", \"Missed clock-out\"]",
        "priority": "high",
        "status": "completed",
        "estimated_date": "July 24, 2025",
        "created_at": "2025-06-30T08:00:00Z",
        "updated_at": "2025-07-24T17:00:00Z"
    },
    {
        "id": "july-12",
        "title": "Review Invite to the Team",
        "description": "Test the team invitation flow",
        "value": "Smoother onboarding",
        "who_uses": "Admin",
        "user_types": ["Admin"],
        "examples": null,
        "priority": "medium",
        "status": "in-progress",
        "estimated_date": "July 26, 2025"
    },
    {
        "id": "aug-3",
        "title": "Sales leaderboard",
        "description": "Rank stores by weekly sales",
        "value": "Friendly competition",
        "who_uses": "Sales reps and managers",
        "examples": ["Top 5 stores"],
        "priority": "low",
        "status": "not-started",
        "estimated_date": "August 31, 2025"
    },
    {
        "id": "oct-1",
        "title": "Offline mode",
        "priority": "high",
        "status": "not-started",
        "estimated_date": "October 2, 2025"
    },
    {
        "id": "next-year",
        "title": "Partner portal",
        "priority": "low",
        "status": "not-started",
        "estimated_date": "January 15, 2026"
    },
    {
        "id": "undated",
        "title": "Someday feature",
        "priority": "low",
        "status": "not-started",
        "estimated_date": "TBD"
    }
]"#;

/// Installs a thread-local subscriber that writes through the test harness.
///
/// Set `RUST_LOG=roadmap=debug` to see service diagnostics.
#[fixture]
pub fn tracing_guard() -> DefaultGuard {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .set_default()
}

/// Provides a repository seeded from [`SEED_ROWS`].
#[fixture]
pub fn repository() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::from_records_json(SEED_ROWS).expect("seed rows are valid"))
}

/// Provides a service over the seeded repository.
#[fixture]
pub fn service(repository: Arc<InMemoryTaskRepository>) -> TestService {
    RoadmapService::new(repository, Arc::new(DefaultClock))
}

/// Builds a task identifier for lookups.
pub fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}
