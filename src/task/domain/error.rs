//! Error types for roadmap task validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The month number is outside `1..=12`.
    #[error("invalid month number {0}, expected 1 through 12")]
    InvalidMonth(u32),

    /// The month label does not follow `<Month> <Year>` format.
    #[error("invalid month label '{0}', expected '<Month> <Year>'")]
    InvalidMonthLabel(String),

    /// The status value is not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The priority value is not recognised.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),

    /// The user type value is not recognised.
    #[error(transparent)]
    InvalidUserType(#[from] ParseUserTypeError),
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing user types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user type: {0}")]
pub struct ParseUserTypeError(pub String);

/// Errors returned while loading a month catalog.
#[derive(Debug, Error)]
pub enum MonthCatalogError {
    /// The catalog document is not valid JSON of the expected shape.
    #[error("invalid month catalog document: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog key is not a valid month label.
    #[error(transparent)]
    Key(#[from] TaskDomainError),
}
