//! Row shape of the task datastore and its mapping to domain tasks.

use crate::task::domain::{
    EstimatedDate, PersistedTaskData, Priority, Task, TaskDetails, TaskDomainError, TaskId,
    TaskStatus, UserType,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A `tasks` row as the datastore returns it.
///
/// Column names follow the datastore's `snake_case` schema. `examples` is
/// kept as raw JSON because older rows store it as a JSON-encoded string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Business value text.
    #[serde(default)]
    pub value: String,
    /// Free-text audience description.
    #[serde(default)]
    pub who_uses: String,
    /// Structured audience tags.
    #[serde(default)]
    pub user_types: Vec<String>,
    /// Examples as a JSON array, a JSON-encoded array string, or null.
    #[serde(default)]
    pub examples: Value,
    /// Priority text.
    pub priority: String,
    /// Status text.
    pub status: String,
    /// Estimated date text.
    pub estimated_date: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Latest edit timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Errors raised while mapping datastore rows.
#[derive(Debug, Error)]
pub enum TaskRecordError {
    /// A column value failed domain validation.
    #[error("task record {id}: {source}")]
    Domain {
        /// Identifier of the offending row.
        id: String,
        /// Underlying validation failure.
        source: TaskDomainError,
    },

    /// The `examples` column is neither an array of strings nor null.
    #[error("task record {id}: examples must be a list of strings")]
    InvalidExamples {
        /// Identifier of the offending row.
        id: String,
    },

    /// The document is not a valid list of task rows.
    #[error("invalid task record document: {0}")]
    Json(#[from] serde_json::Error),

    /// Two rows share an identifier.
    #[error("duplicate task identifier in records: {0}")]
    DuplicateTask(TaskId),
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskRecordError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let examples = parse_examples(&record.examples).ok_or_else(|| {
            TaskRecordError::InvalidExamples {
                id: record.id.clone(),
            }
        })?;
        let row_id = record.id.clone();
        to_persisted(record, examples)
            .map(Self::from_persisted)
            .map_err(|source| TaskRecordError::Domain { id: row_id, source })
    }
}

fn to_persisted(
    record: TaskRecord,
    examples: Vec<String>,
) -> Result<PersistedTaskData, TaskDomainError> {
    let user_types = record
        .user_types
        .iter()
        .map(|raw| UserType::try_from(raw.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let details = TaskDetails::new(record.title)?
        .with_description(record.description)
        .with_value(record.value)
        .with_who_uses_it(record.who_uses)
        .with_examples(examples)
        .with_user_types(user_types);

    Ok(PersistedTaskData {
        id: TaskId::new(record.id)?,
        details,
        priority: Priority::try_from(record.priority.as_str())?,
        status: TaskStatus::try_from(record.status.as_str())?,
        estimated_date: EstimatedDate::parse(record.estimated_date),
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

/// Reads the `examples` column, returning `None` when it is malformed.
fn parse_examples(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Null => Some(Vec::new()),
        Value::String(encoded) => serde_json::from_str::<Vec<String>>(encoded).ok(),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => None,
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        let details = task.details();
        Self {
            id: task.id().to_string(),
            title: details.title.clone(),
            description: details.description.clone(),
            value: details.value.clone(),
            who_uses: details.who_uses_it.clone(),
            user_types: details
                .user_types
                .iter()
                .map(|user_type| user_type.as_str().to_owned())
                .collect(),
            examples: Value::Array(
                details
                    .examples
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
            priority: task.priority().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            estimated_date: task.estimated_date().to_string(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Parses a JSON array of task rows into domain tasks.
///
/// # Errors
///
/// Returns [`TaskRecordError`] for malformed JSON or the first row that fails
/// mapping.
pub fn tasks_from_json(document: &str) -> Result<Vec<Task>, TaskRecordError> {
    let records: Vec<TaskRecord> = serde_json::from_str(document)?;
    records.into_iter().map(Task::try_from).collect()
}
