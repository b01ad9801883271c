//! Caller-held view state and read-only projections over month buckets.
//!
//! Nothing here is persisted. A UI owns a [`ViewState`] and a [`TaskFilter`]
//! and applies them to freshly grouped buckets after every refresh.

use super::{MonthBucket, Task, TaskId, TaskStatus, UserType};
use std::collections::BTreeSet;

/// Search text and audience filter applied to tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: String,
    user_type: Option<UserType>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the case-insensitive search text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restricts matches to one audience.
    #[must_use]
    pub const fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }

    /// Returns `true` when the task satisfies both search and audience.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_query(task) && self.matches_user_type(task)
    }

    fn matches_query(&self, task: &Task) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let details = task.details();
        [&details.title, &details.description, &details.value]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Tagged tasks match on their tags; untagged tasks fall back to the
    /// free-text audience description.
    fn matches_user_type(&self, task: &Task) -> bool {
        let Some(user_type) = self.user_type else {
            return true;
        };
        let details = task.details();
        if details.user_types.is_empty() {
            return details
                .who_uses_it
                .to_lowercase()
                .contains(&user_type.as_str().to_lowercase());
        }
        details.user_types.contains(&user_type)
    }
}

/// Applies `filter` to every bucket, dropping buckets left empty.
#[must_use]
pub fn filter_buckets(buckets: &[MonthBucket], filter: &TaskFilter) -> Vec<MonthBucket> {
    buckets
        .iter()
        .filter_map(|bucket| {
            let tasks: Vec<Task> = bucket
                .tasks
                .iter()
                .filter(|task| filter.matches(task))
                .cloned()
                .collect();
            (!tasks.is_empty()).then(|| MonthBucket {
                tasks,
                ..bucket.clone()
            })
        })
        .collect()
}

/// Status counts across a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Number of tasks counted.
    pub total: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Tasks not started.
    pub not_started: usize,
}

impl ProgressSummary {
    /// Counts statuses across `tasks`.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks
            .into_iter()
            .fold(Self::default(), |mut summary, task| {
                summary.total += 1;
                match task.status() {
                    TaskStatus::Completed => summary.completed += 1,
                    TaskStatus::InProgress => summary.in_progress += 1,
                    TaskStatus::NotStarted => summary.not_started += 1,
                }
                summary
            })
    }

    /// Counts statuses across every task of every bucket.
    #[must_use]
    pub fn from_buckets(buckets: &[MonthBucket]) -> Self {
        Self::from_tasks(buckets.iter().flat_map(|bucket| bucket.tasks.iter()))
    }

    /// Returns the completed share rounded to the nearest whole percent.
    ///
    /// Returns `0` when there are no tasks.
    #[must_use]
    pub fn percent_complete(&self) -> usize {
        self.completed
            .saturating_mul(200)
            .saturating_add(self.total)
            .checked_div(self.total.saturating_mul(2))
            .unwrap_or_default()
    }
}

/// Expanded months and bookmarked tasks of one viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    expanded_months: BTreeSet<String>,
    bookmarked_tasks: BTreeSet<TaskId>,
}

impl ViewState {
    /// Creates a view with every month collapsed and nothing bookmarked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips a month's expansion and returns whether it is now expanded.
    pub fn toggle_month(&mut self, month_id: &str) -> bool {
        if self.expanded_months.remove(month_id) {
            return false;
        }
        self.expanded_months.insert(month_id.to_owned());
        true
    }

    /// Returns `true` when the month is expanded.
    #[must_use]
    pub fn is_expanded(&self, month_id: &str) -> bool {
        self.expanded_months.contains(month_id)
    }

    /// Flips a task bookmark and returns whether it is now bookmarked.
    pub fn toggle_bookmark(&mut self, task_id: &TaskId) -> bool {
        if self.bookmarked_tasks.remove(task_id) {
            return false;
        }
        self.bookmarked_tasks.insert(task_id.clone());
        true
    }

    /// Returns `true` when the task is bookmarked.
    #[must_use]
    pub fn is_bookmarked(&self, task_id: &TaskId) -> bool {
        self.bookmarked_tasks.contains(task_id)
    }

    /// Iterates bookmarked task identifiers in order.
    pub fn bookmarked(&self) -> impl Iterator<Item = &TaskId> {
        self.bookmarked_tasks.iter()
    }

    /// Copies expansion flags onto freshly grouped buckets.
    pub fn apply_expansion(&self, buckets: &mut [MonthBucket]) {
        for bucket in buckets {
            bucket.is_expanded = self.is_expanded(&bucket.id);
        }
    }
}
