//! In-memory integration tests for the roadmap service.

use std::sync::Arc;

use super::helpers::{TestService, repository, service, task_id, tracing_guard};
use mockable::DefaultClock;
use roadmap::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        EstimatedDate, MonthBucket, Priority, ProgressSummary, TaskFilter, TaskStatus,
        UnmappedReason, UserType, ViewState, filter_buckets,
    },
    ports::TaskRepository,
    services::{RoadmapConfig, RoadmapService, RoadmapServiceError},
};
use rstest::rstest;
use tracing::subscriber::DefaultGuard;

fn layout(months: &[MonthBucket]) -> Vec<(String, Vec<String>)> {
    months
        .iter()
        .map(|month| {
            let ids = month
                .tasks
                .iter()
                .map(|task| task.id().as_str().to_owned())
                .collect();
            (month.title.clone(), ids)
        })
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_rows_group_into_catalog_months(service: TestService, tracing_guard: DefaultGuard) {
    let _logs = tracing_guard;

    let months = service.fetch_months().await.expect("fetch should succeed");

    assert_eq!(
        layout(&months),
        vec![
            (
                "JULY 2025".to_owned(),
                vec!["july-10".to_owned(), "july-12".to_owned()]
            ),
            ("SEPTEMBER 2025".to_owned(), vec!["aug-3".to_owned()]),
            ("OCTOBER 2025".to_owned(), vec!["oct-1".to_owned()]),
        ]
    );
    let september = months.get(1).expect("september bucket");
    assert!(september.theme.starts_with("Mobile Apps & Motivation"));
    let moved = september.tasks.first().expect("moved task");
    assert_eq!(moved.estimated_date().as_str(), "September 1, 2025");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_rows_keep_their_original_dates(
    repository: Arc<InMemoryTaskRepository>,
    tracing_guard: DefaultGuard,
) {
    let _logs = tracing_guard;
    let service = RoadmapService::new(Arc::clone(&repository), Arc::new(DefaultClock));

    service.fetch_months().await.expect("fetch should succeed");

    let stored = repository
        .find_by_id(&task_id("aug-3"))
        .await
        .expect("lookup should succeed")
        .expect("row exists");
    assert_eq!(stored.estimated_date().as_str(), "August 31, 2025");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn skipped_rows_are_reported(service: TestService) {
    let grouping = service
        .fetch_grouping()
        .await
        .expect("fetch should succeed");

    let skipped: Vec<(&str, UnmappedReason)> = grouping
        .unmapped
        .iter()
        .map(|entry| (entry.task_id.as_str(), entry.reason))
        .collect();
    assert_eq!(skipped.len(), 2);
    assert!(matches!(
        skipped.first(),
        Some(("next-year", UnmappedReason::UnknownMonth(_)))
    ));
    assert_eq!(skipped.get(1), Some(&("undated", UnmappedReason::UnparseableDate)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn raw_configuration_groups_by_stored_month(repository: Arc<InMemoryTaskRepository>) {
    let service = RoadmapService::with_config(
        repository,
        Arc::new(DefaultClock),
        RoadmapConfig::default().without_weekend_normalization(),
    );

    let months = service.fetch_months().await.expect("fetch should succeed");

    let titles: Vec<&str> = months.iter().map(|month| month.title.as_str()).collect();
    assert_eq!(titles, vec!["JULY 2025", "AUGUST 2025", "OCTOBER 2025"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_view_filters_and_summarises(service: TestService) {
    let months = service.fetch_months().await.expect("fetch should succeed");

    let progress = ProgressSummary::from_buckets(&months);
    assert_eq!((progress.total, progress.completed), (4, 1));
    assert_eq!(progress.percent_complete(), 25);

    let sales = filter_buckets(&months, &TaskFilter::new().with_user_type(UserType::SalesReps));
    assert_eq!(
        layout(&sales),
        vec![
            ("JULY 2025".to_owned(), vec!["july-10".to_owned()]),
            ("SEPTEMBER 2025".to_owned(), vec!["aug-3".to_owned()]),
        ]
    );

    let mut view = ViewState::new();
    view.toggle_month("july-2025");
    let mut shown = months;
    view.apply_expansion(&mut shown);
    assert_eq!(shown.iter().filter(|month| month.is_expanded).count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_are_visible_on_next_fetch(service: TestService) {
    let oct = task_id("oct-1");

    service
        .update_status(&oct, TaskStatus::InProgress)
        .await
        .expect("status update should succeed");
    service
        .update_priority(&oct, Priority::Low)
        .await
        .expect("priority update should succeed");
    service
        .update_date(&oct, EstimatedDate::parse("November 29, 2025"))
        .await
        .expect("date update should succeed");

    let months = service.fetch_months().await.expect("fetch should succeed");
    let december = months.last().expect("december bucket");
    assert_eq!(december.id, "december-2025");
    let edited = december.tasks.first().expect("edited task");
    assert_eq!(edited.status(), TaskStatus::InProgress);
    assert_eq!(edited.priority(), Priority::Low);
    assert_eq!(edited.estimated_date().as_str(), "December 1, 2025");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggling_completion_updates_month_counts(service: TestService) {
    service
        .toggle_completion(&task_id("july-12"))
        .await
        .expect("toggle should succeed");

    let months = service.fetch_months().await.expect("fetch should succeed");
    let july = months.first().expect("july bucket");
    assert_eq!(july.completed_count(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_unknown_rows_fails(service: TestService) {
    let result = service.toggle_completion(&task_id("ghost")).await;

    assert!(matches!(result, Err(RoadmapServiceError::TaskNotFound(_))));
}

#[rstest]
fn duplicate_seed_rows_are_rejected() {
    let rows = r#"[
        {"id": "a", "title": "One", "priority": "low", "status": "completed", "estimated_date": "July 1, 2025"},
        {"id": "a", "title": "Two", "priority": "low", "status": "completed", "estimated_date": "July 2, 2025"}
    ]"#;

    assert!(InMemoryTaskRepository::from_records_json(rows).is_err());
}
