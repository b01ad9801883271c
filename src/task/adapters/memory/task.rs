//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    adapters::record::{TaskRecordError, tasks_from_json},
    domain::{Task, TaskId, sort_chronologically},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError::DuplicateTask`] when two tasks share an
    /// identifier.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskRecordError> {
        let mut state = InMemoryTaskState::default();
        for task in tasks {
            let id = task.id().clone();
            if state.tasks.insert(id.clone(), task).is_some() {
                return Err(TaskRecordError::DuplicateTask(id));
            }
        }
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Creates a repository seeded from a JSON array of datastore rows.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError`] when the document or a row is malformed,
    /// or when two rows share an identifier.
    pub fn from_records_json(document: &str) -> Result<Self, TaskRecordError> {
        Self::with_tasks(tasks_from_json(document)?)
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .tasks
            .get_mut(task.id())
            .ok_or_else(|| TaskRepositoryError::NotFound(task.id().clone()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn list_by_estimated_date(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        sort_chronologically(&mut tasks);
        Ok(tasks)
    }
}
