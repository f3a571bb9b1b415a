use database::{PageRequest, Paginated};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, TaskDetail, TaskSummary, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(category_id = %input.category_id))]
    pub async fn create(&self, input: CreateTask) -> TaskResult<TaskDetail> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.repository.create(input).await?;
        Ok(task.into())
    }

    /// One page of visible tasks with each category reduced to its name
    #[instrument(skip(self, page), fields(page = page.page, limit = page.limit))]
    pub async fn get_all(&self, page: PageRequest) -> TaskResult<Paginated<TaskSummary>> {
        let (tasks, total) = self.repository.list(page).await?;
        Ok(Paginated::new(tasks, total, page).map(TaskSummary::from))
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_one(&self, id: Uuid) -> TaskResult<TaskDetail> {
        self.repository
            .get_by_id(id)
            .await?
            .map(TaskDetail::from)
            .ok_or(TaskError::NotFound(id))
    }

    /// Partial update followed by a re-read through [`Self::get_one`].
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<TaskDetail> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        if !self.repository.update(id, input).await? {
            return Err(TaskError::NotFound(id));
        }

        self.get_one(id).await
    }

    /// Soft delete. Deleting an already deleted task is `NotFound`.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete(&self, id: Uuid) -> TaskResult<()> {
        if !self.repository.soft_delete(id).await? {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
