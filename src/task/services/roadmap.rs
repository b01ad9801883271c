//! Service layer for fetching the grouped roadmap and editing tasks.

use super::RoadmapConfig;
use crate::task::{
    domain::{
        EstimatedDate, MonthBucket, MonthGrouping, Priority, Task, TaskDomainError, TaskId,
        TaskStatus, group_by_month, normalize_task_dates, partition_by_month,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for roadmap operations.
#[derive(Debug, Error)]
pub enum RoadmapServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The task to edit does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Result type for roadmap service operations.
pub type RoadmapResult<T> = Result<T, RoadmapServiceError>;

/// Roadmap orchestration service.
#[derive(Clone)]
pub struct RoadmapService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: RoadmapConfig,
}

impl<R, C> RoadmapService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the reference configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, RoadmapConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: RoadmapConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RoadmapConfig {
        &self.config
    }

    /// Fetches every task and groups it into catalog months.
    ///
    /// Tasks outside the catalog are logged and left out.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapServiceError::Repository`] when the datastore fails.
    pub async fn fetch_months(&self) -> RoadmapResult<Vec<MonthBucket>> {
        let tasks = self.load_for_display().await?;
        Ok(group_by_month(tasks, &self.config.catalog))
    }

    /// Fetches every task and returns the grouping with skipped tasks.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapServiceError::Repository`] when the datastore fails.
    pub async fn fetch_grouping(&self) -> RoadmapResult<MonthGrouping> {
        let tasks = self.load_for_display().await?;
        Ok(partition_by_month(tasks, &self.config.catalog))
    }

    /// Sets a task's status.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapServiceError::TaskNotFound`] for unknown tasks and
    /// [`RoadmapServiceError::Repository`] when persistence fails.
    pub async fn update_status(&self, id: &TaskId, status: TaskStatus) -> RoadmapResult<Task> {
        let task = self
            .edit(id, |task, clock| task.set_status(status, clock))
            .await?;
        debug!(task_id = %id, status = %status, "updated task status");
        Ok(task)
    }

    /// Sets a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapServiceError::TaskNotFound`] for unknown tasks and
    /// [`RoadmapServiceError::Repository`] when persistence fails.
    pub async fn update_priority(&self, id: &TaskId, priority: Priority) -> RoadmapResult<Task> {
        let task = self
            .edit(id, |task, clock| task.set_priority(priority, clock))
            .await?;
        debug!(task_id = %id, priority = %priority, "updated task priority");
        Ok(task)
    }

    /// Moves a task to a new estimated date.
    ///
    /// The date is stored as given; weekend normalization applies only when
    /// months are fetched.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapServiceError::TaskNotFound`] for unknown tasks and
    /// [`RoadmapServiceError::Repository`] when persistence fails.
    pub async fn update_date(
        &self,
        id: &TaskId,
        estimated_date: EstimatedDate,
    ) -> RoadmapResult<Task> {
        let logged_date = estimated_date.to_string();
        let task = self
            .edit(id, move |task, clock| task.reschedule(estimated_date, clock))
            .await?;
        debug!(task_id = %id, estimated_date = %logged_date, "rescheduled task");
        Ok(task)
    }

    /// Flips a task between completed and not started.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapServiceError::TaskNotFound`] for unknown tasks and
    /// [`RoadmapServiceError::Repository`] when persistence fails.
    pub async fn toggle_completion(&self, id: &TaskId) -> RoadmapResult<Task> {
        let task = self
            .edit(id, |task, clock| {
                task.toggle_completion(clock);
            })
            .await?;
        debug!(task_id = %id, status = %task.status(), "toggled task completion");
        Ok(task)
    }

    async fn load_for_display(&self) -> RoadmapResult<Vec<Task>> {
        let tasks = self.repository.list_by_estimated_date().await?;
        debug!(tasks = tasks.len(), "fetched roadmap tasks");
        if self.config.normalize_weekends {
            return Ok(normalize_task_dates(tasks));
        }
        Ok(tasks)
    }

    /// Loads a task, applies `change`, and persists the result.
    async fn edit<F>(&self, id: &TaskId, change: F) -> RoadmapResult<Task>
    where
        F: FnOnce(&mut Task, &C) + Send,
    {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RoadmapServiceError::TaskNotFound(id.clone()))?;
        change(&mut task, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }
}
