//! Month grouping of roadmap tasks.
//!
//! Grouping is a pure pass over the current task set: it is re-run in full
//! whenever tasks change and keeps no state between runs.

use super::{EstimatedDate, MonthBucket, MonthCatalog, MonthKey, Task, TaskId};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Why a task was left out of every month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmappedReason {
    /// The estimated date text does not parse.
    UnparseableDate,
    /// The month has no catalog entry.
    UnknownMonth(MonthKey),
}

impl fmt::Display for UnmappedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparseableDate => f.write_str("unparseable date"),
            Self::UnknownMonth(key) => write!(f, "month {key} not in catalog"),
        }
    }
}

/// A task the grouping pass could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedTask {
    /// Identifier of the skipped task.
    pub task_id: TaskId,
    /// Date text the task carried.
    pub estimated_date: EstimatedDate,
    /// Reason it was skipped.
    pub reason: UnmappedReason,
}

impl UnmappedTask {
    fn new(task: &Task, reason: UnmappedReason) -> Self {
        Self {
            task_id: task.id().clone(),
            estimated_date: task.estimated_date().clone(),
            reason,
        }
    }
}

/// Result of a grouping pass, including the tasks it skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthGrouping {
    /// Populated buckets ordered by earliest task.
    pub buckets: Vec<MonthBucket>,
    /// Skipped tasks ordered by identifier.
    pub unmapped: Vec<UnmappedTask>,
}

/// Sorts tasks by estimated date, breaking ties by identifier.
///
/// Unparseable dates sort after every valid date.
pub fn sort_chronologically(tasks: &mut [Task]) {
    tasks.sort_by(|left, right| {
        left.estimated_date()
            .cmp(right.estimated_date())
            .then_with(|| left.id().cmp(right.id()))
    });
}

/// Moves every weekend estimated date to the following Monday.
#[must_use]
pub fn normalize_task_dates(tasks: impl IntoIterator<Item = Task>) -> Vec<Task> {
    tasks
        .into_iter()
        .map(|task| {
            let normalized = task.estimated_date().normalized();
            task.with_estimated_date(normalized)
        })
        .collect()
}

/// Partitions tasks into catalog month buckets and reports the rest.
///
/// The output does not depend on input order.
#[must_use]
pub fn partition_by_month(
    tasks: impl IntoIterator<Item = Task>,
    catalog: &MonthCatalog,
) -> MonthGrouping {
    let mut by_month: BTreeMap<MonthKey, Vec<Task>> = BTreeMap::new();
    let mut unmapped = Vec::new();

    for task in tasks {
        let Some(key) = task.estimated_date().month_key() else {
            unmapped.push(UnmappedTask::new(&task, UnmappedReason::UnparseableDate));
            continue;
        };
        if catalog.contains(key) {
            by_month.entry(key).or_default().push(task);
        } else {
            unmapped.push(UnmappedTask::new(&task, UnmappedReason::UnknownMonth(key)));
        }
    }

    let mut buckets: Vec<MonthBucket> = by_month
        .into_iter()
        .filter_map(|(key, mut month_tasks)| {
            let metadata = catalog.get(key)?;
            sort_chronologically(&mut month_tasks);
            Some(MonthBucket::new(key, metadata, month_tasks))
        })
        .collect();
    buckets.sort_by(|left, right| {
        left.earliest_date()
            .cmp(&right.earliest_date())
            .then_with(|| left.key.cmp(&right.key))
    });
    unmapped.sort_by(|left, right| left.task_id.cmp(&right.task_id));

    MonthGrouping { buckets, unmapped }
}

/// Groups tasks into catalog month buckets.
///
/// Tasks whose month is not in the catalog, or whose date does not parse,
/// appear in no bucket; each one is logged at `warn` level.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use roadmap::task::domain::{
///     EstimatedDate, MonthCatalog, Priority, Task, TaskDetails, TaskId, TaskStatus,
///     group_by_month,
/// };
///
/// let task = Task::new(
///     TaskId::new("july-1").expect("valid id"),
///     TaskDetails::new("Review sign up flow").expect("valid title"),
///     Priority::High,
///     TaskStatus::InProgress,
///     EstimatedDate::parse("July 24, 2025"),
///     &DefaultClock,
/// );
/// let months = group_by_month(vec![task], &MonthCatalog::reference());
/// assert_eq!(months.len(), 1);
/// assert_eq!(months.first().map(|m| m.title.as_str()), Some("JULY 2025"));
/// ```
#[must_use]
pub fn group_by_month(
    tasks: impl IntoIterator<Item = Task>,
    catalog: &MonthCatalog,
) -> Vec<MonthBucket> {
    let grouping = partition_by_month(tasks, catalog);
    for skipped in &grouping.unmapped {
        warn!(
            task_id = %skipped.task_id,
            estimated_date = %skipped.estimated_date,
            reason = %skipped.reason,
            "task left out of month grouping"
        );
    }
    debug!(
        months = grouping.buckets.len(),
        skipped = grouping.unmapped.len(),
        "grouped roadmap tasks by month"
    );
    grouping.buckets
}
