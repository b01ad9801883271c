//! Roadmap task aggregate and its enumerated attributes.

use super::{
    EstimatedDate, ParsePriorityError, ParseTaskStatusError, ParseUserTypeError, TaskDomainError,
    TaskId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress state of a roadmap task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    NotStarted,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the status a completion toggle moves to.
    ///
    /// Completed tasks reopen as not started; anything else completes.
    #[must_use]
    pub const fn toggled_completion(self) -> Self {
        match self {
            Self::Completed => Self::NotStarted,
            Self::NotStarted | Self::InProgress => Self::Completed,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "completed" | "complete" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative importance of a roadmap task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must land first.
    High,
    /// Normal importance.
    Medium,
    /// Can slip.
    Low,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience a roadmap task serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserType {
    /// Field promoters.
    #[serde(rename = "Promoters")]
    Promoters,
    /// Sales representatives.
    #[serde(rename = "Sales Reps")]
    SalesReps,
    /// Administrative staff.
    #[serde(rename = "Admin")]
    Admin,
}

impl UserType {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Promoters => "Promoters",
            Self::SalesReps => "Sales Reps",
            Self::Admin => "Admin",
        }
    }
}

impl TryFrom<&str> for UserType {
    type Error = ParseUserTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "promoters" | "promoter" => Ok(Self::Promoters),
            "sales reps" | "sales rep" => Ok(Self::SalesReps),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseUserTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive fields of a roadmap task.
///
/// These are opaque to grouping; only search and filtering read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    /// Short task title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Business value delivered.
    pub value: String,
    /// Free-text description of the audience.
    pub who_uses_it: String,
    /// Illustrative examples, possibly empty.
    pub examples: Vec<String>,
    /// Structured audience tags.
    pub user_types: Vec<UserType>,
}

impl TaskDetails {
    /// Creates task details with a required title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            title: normalized.to_owned(),
            description: String::new(),
            value: String::new(),
            who_uses_it: String::new(),
            examples: Vec::new(),
            user_types: Vec::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the business value text.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the free-text audience description.
    #[must_use]
    pub fn with_who_uses_it(mut self, who_uses_it: impl Into<String>) -> Self {
        self.who_uses_it = who_uses_it.into();
        self
    }

    /// Sets the examples.
    #[must_use]
    pub fn with_examples(mut self, examples: impl IntoIterator<Item = String>) -> Self {
        self.examples = examples.into_iter().collect();
        self
    }

    /// Sets the audience tags, dropping duplicates while keeping order.
    #[must_use]
    pub fn with_user_types(mut self, user_types: impl IntoIterator<Item = UserType>) -> Self {
        self.user_types.clear();
        for user_type in user_types {
            if !self.user_types.contains(&user_type) {
                self.user_types.push(user_type);
            }
        }
        self
    }
}

/// Roadmap task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    priority: Priority,
    status: TaskStatus,
    estimated_date: EstimatedDate,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted descriptive fields.
    pub details: TaskDetails,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted target date text.
    pub estimated_date: EstimatedDate,
    /// Persisted creation timestamp, if the store records one.
    pub created_at: Option<DateTime<Utc>>,
    /// Persisted latest edit timestamp, if the store records one.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    #[must_use]
    pub fn new(
        id: TaskId,
        details: TaskDetails,
        priority: Priority,
        status: TaskStatus,
        estimated_date: EstimatedDate,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            details,
            priority,
            status,
            estimated_date,
            created_at: Some(timestamp),
            updated_at: Some(timestamp),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            priority: data.priority,
            status: data.status,
            estimated_date: data.estimated_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the descriptive fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the target date.
    #[must_use]
    pub const fn estimated_date(&self) -> &EstimatedDate {
        &self.estimated_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns `true` when the task is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Returns the task with its date replaced, without touching timestamps.
    ///
    /// Used for display-time normalization that is never written back.
    #[must_use]
    pub fn with_estimated_date(mut self, estimated_date: EstimatedDate) -> Self {
        self.estimated_date = estimated_date;
        self
    }

    /// Sets the task status.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Sets the task priority.
    pub fn set_priority(&mut self, priority: Priority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Moves the task to a new target date.
    pub fn reschedule(&mut self, estimated_date: EstimatedDate, clock: &impl Clock) {
        self.estimated_date = estimated_date;
        self.touch(clock);
    }

    /// Flips completion and returns the new status.
    pub fn toggle_completion(&mut self, clock: &impl Clock) -> TaskStatus {
        self.set_status(self.status.toggled_completion(), clock);
        self.status
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc());
    }
}
