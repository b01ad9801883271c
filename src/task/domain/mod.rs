//! Domain model for the roadmap.
//!
//! Covers the task aggregate, estimated-date normalization, month grouping,
//! and caller-held view projections. Persistence and transport stay outside
//! of the domain boundary.

mod date;
mod error;
mod grouping;
mod ids;
mod month;
mod task;
mod view;

pub use date::{DateLayout, EstimatedDate, normalize_date_text, shift_weekend_to_monday};
pub use error::{
    MonthCatalogError, ParsePriorityError, ParseTaskStatusError, ParseUserTypeError,
    TaskDomainError,
};
pub use grouping::{
    MonthGrouping, UnmappedReason, UnmappedTask, group_by_month, normalize_task_dates,
    partition_by_month, sort_chronologically,
};
pub use ids::TaskId;
pub use month::{MonthBucket, MonthCatalog, MonthKey, MonthMetadata};
pub use task::{PersistedTaskData, Priority, Task, TaskDetails, TaskStatus, UserType};
pub use view::{ProgressSummary, TaskFilter, ViewState, filter_buckets};
