use async_trait::async_trait;
use chrono::Utc;
use database::PageRequest;
use domain_categories::{CategoryRepository, InMemoryCategoryRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task persistence.
///
/// A task is visible only while neither it nor its category is soft-deleted.
/// Reads return tasks with their category attached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task under a live category, `Referential` otherwise
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Find a visible task by ID
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// One page of visible tasks, oldest first, plus the total count of visible rows
    async fn list(&self, page: PageRequest) -> TaskResult<(Vec<Task>, u64)>;

    /// Apply a partial update to a visible task. `false` when no row matched.
    ///
    /// A new `category_id` must name a live category (`Referential` otherwise).
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<bool>;

    /// Stamp `deleted_at` on a visible task. `false` when no row matched.
    async fn soft_delete(&self, id: Uuid) -> TaskResult<bool>;
}

/// In-memory implementation of TaskRepository (for development/testing)
///
/// Shares its category store with an [`InMemoryCategoryRepository`] so that
/// category deletes hide tasks the same way the database join does.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
    categories: InMemoryCategoryRepository,
}

impl InMemoryTaskRepository {
    pub fn new(categories: InMemoryCategoryRepository) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            categories,
        }
    }

    async fn live_category(&self, id: Uuid) -> TaskResult<Option<domain_categories::Category>> {
        self.categories
            .get_by_id(id)
            .await
            .map_err(|e| TaskError::Database(e.to_string()))
    }

    /// `task` with its category attached, or `None` when it is not visible
    async fn visible(&self, task: &Task) -> TaskResult<Option<Task>> {
        if task.is_deleted() {
            return Ok(None);
        }
        let category = self.live_category(task.category_id).await?;
        Ok(category.map(|c| task.clone().with_category(Some(c))))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let category = self
            .live_category(input.category_id)
            .await?
            .ok_or_else(|| TaskError::missing_category(input.category_id))?;

        let task = Task::new(input);
        self.tasks.write().await.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, category_id = %category.id, "Created task");
        Ok(task.with_category(Some(category)))
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let task = self.tasks.read().await.get(&id).cloned();
        match task {
            Some(task) => self.visible(&task).await,
            None => Ok(None),
        }
    }

    async fn list(&self, page: PageRequest) -> TaskResult<(Vec<Task>, u64)> {
        let mut all: Vec<Task> = self.tasks.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let mut live = Vec::with_capacity(all.len());
        for task in &all {
            if let Some(task) = self.visible(task).await? {
                live.push(task);
            }
        }

        let total = live.len() as u64;
        let data = live
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
            .collect();

        Ok((data, total))
    }

    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<bool> {
        if let Some(category_id) = input.category_id {
            if self.live_category(category_id).await?.is_none() {
                return Err(TaskError::missing_category(category_id));
            }
        }

        let Some(current) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&current.id) {
            Some(task) if !task.is_deleted() => {
                task.apply_update(input);
                tracing::info!(task_id = %id, "Updated task");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn soft_delete(&self, id: Uuid) -> TaskResult<bool> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&id) {
            Some(task) if !task.is_deleted() => {
                task.deleted_at = Some(Utc::now());
                tracing::info!(task_id = %id, "Soft deleted task");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use domain_categories::{Category, CreateCategory};

    async fn setup() -> (InMemoryTaskRepository, InMemoryCategoryRepository, Category) {
        let categories = InMemoryCategoryRepository::new();
        let study = categories
            .create(CreateCategory {
                name: "Study".to_string(),
            })
            .await
            .unwrap();
        (InMemoryTaskRepository::new(categories.clone()), categories, study)
    }

    fn input(title: &str, category_id: Uuid) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: None,
            status: TaskStatus::default(),
            category_id,
        }
    }

    #[tokio::test]
    async fn test_create_attaches_category() {
        let (repo, _, study) = setup().await;

        let task = repo.create(input("Read chapter 3", study.id)).await.unwrap();
        assert_eq!(task.category, Some(study.clone()));
        assert_eq!(task.status, TaskStatus::Pending);

        let fetched = repo.get_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(fetched, task);
    }

    #[tokio::test]
    async fn test_create_under_unknown_category_is_referential() {
        let (repo, _, _) = setup().await;

        let result = repo.create(input("Orphan", Uuid::now_v7())).await;
        assert!(matches!(result, Err(TaskError::Referential(_))));

        let (_, total) = repo.list(PageRequest::default()).await.unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_deleting_category_hides_its_tasks() {
        let (repo, categories, study) = setup().await;
        let task = repo.create(input("Read chapter 3", study.id)).await.unwrap();

        assert!(categories.soft_delete(study.id).await.unwrap());

        assert!(repo.get_by_id(task.id).await.unwrap().is_none());
        assert_eq!(repo.list(PageRequest::default()).await.unwrap().1, 0);
        assert!(!repo.update(task.id, UpdateTask::default()).await.unwrap());
        assert!(!repo.soft_delete(task.id).await.unwrap());
        assert!(matches!(
            repo.create(input("Late", study.id)).await,
            Err(TaskError::Referential(_))
        ));
    }

    #[tokio::test]
    async fn test_update_moves_task_between_live_categories_only() {
        let (repo, categories, study) = setup().await;
        let personal = categories
            .create(CreateCategory {
                name: "Personal".to_string(),
            })
            .await
            .unwrap();
        let task = repo.create(input("Call mom", study.id)).await.unwrap();

        let moved = UpdateTask {
            category_id: Some(personal.id),
            ..Default::default()
        };
        assert!(repo.update(task.id, moved).await.unwrap());
        let fetched = repo.get_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(fetched.category.map(|c| c.name), Some("Personal".to_string()));

        let nowhere = UpdateTask {
            category_id: Some(Uuid::now_v7()),
            ..Default::default()
        };
        assert!(matches!(
            repo.update(task.id, nowhere).await,
            Err(TaskError::Referential(_))
        ));
    }

    #[tokio::test]
    async fn test_soft_delete_once() {
        let (repo, _, study) = setup().await;
        let task = repo.create(input("Read chapter 3", study.id)).await.unwrap();

        assert!(repo.soft_delete(task.id).await.unwrap());
        assert!(!repo.soft_delete(task.id).await.unwrap());
        assert!(repo.get_by_id(task.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pages_in_creation_order() {
        let (repo, _, study) = setup().await;
        let mut ids = Vec::new();
        for title in ["one", "two", "three"] {
            ids.push(repo.create(input(title, study.id)).await.unwrap().id);
        }

        let (page, total) = repo.list(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.iter().map(|t| t.id).collect::<Vec<_>>(), ids[..2]);

        let (page, _) = repo.list(PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, ids[2]);
        assert!(page[0].category.is_some());
    }
}
