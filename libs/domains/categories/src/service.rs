use database::{PageRequest, Paginated};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategorySummary, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Service layer for Category business logic
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(category_name = %input.name))]
    pub async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// One page of live categories in their summary projection
    #[instrument(skip(self, page), fields(page = page.page, limit = page.limit))]
    pub async fn get_all(&self, page: PageRequest) -> CategoryResult<Paginated<CategorySummary>> {
        let (categories, total) = self.repository.list(page).await?;
        Ok(Paginated::new(categories, total, page).map(CategorySummary::from))
    }

    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn get_one(&self, id: Uuid) -> CategoryResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Partial update followed by a re-read; a miss at either step is `NotFound`.
    #[instrument(skip(self, input), fields(category_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        if !self.repository.update(id, input).await? {
            return Err(CategoryError::NotFound(id));
        }

        self.get_one(id).await
    }

    /// Soft delete. Deleting an already deleted category is `NotFound`.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete(&self, id: Uuid) -> CategoryResult<()> {
        if !self.repository.soft_delete(id).await? {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn category(name: &str) -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::now_v7(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_before_repository() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_create().never();

        let service = CategoryService::new(mock_repo);
        let result = service
            .create(CreateCategory {
                name: String::new(),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_all_projects_and_reports_meta() {
        let mut mock_repo = MockCategoryRepository::new();
        let rows = vec![category("Study"), category("Personal")];
        let expected_ids: Vec<Uuid> = rows.iter().map(|c| c.id).collect();

        mock_repo
            .expect_list()
            .with(eq(PageRequest::new(2, 2)))
            .returning(move |_| Ok((rows.clone(), 5)));

        let service = CategoryService::new(mock_repo);
        let page = service.get_all(PageRequest::new(2, 2)).await.unwrap();

        assert_eq!(page.meta.total, 5);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.limit, 2);
        assert_eq!(
            page.data.iter().map(|c| c.id).collect::<Vec<_>>(),
            expected_ids
        );
    }

    #[tokio::test]
    async fn test_get_one_missing_is_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.get_one(id).await;
        assert!(matches!(result, Err(CategoryError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_without_matching_row_skips_refetch() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(false));
        mock_repo.expect_get_by_id().never();

        let service = CategoryService::new(mock_repo);
        let result = service
            .update(
                Uuid::now_v7(),
                UpdateCategory {
                    name: Some("Home".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(CategoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_refetch_miss_collapses_to_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(true));
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service
            .update(
                Uuid::now_v7(),
                UpdateCategory {
                    name: Some("Home".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(CategoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_returns_refreshed_category() {
        let mut mock_repo = MockCategoryRepository::new();
        let mut refreshed = category("Home");
        let id = refreshed.id;
        refreshed.name = "Household".to_string();
        let expected = refreshed.clone();

        mock_repo
            .expect_update()
            .withf(move |got, input| *got == id && input.name.as_deref() == Some("Household"))
            .returning(|_, _| Ok(true));
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(refreshed.clone())));

        let service = CategoryService::new(mock_repo);
        let updated = service
            .update(
                id,
                UpdateCategory {
                    name: Some("Household".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated, expected);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_soft_delete().returning(|_| Ok(false));

        let service = CategoryService::new(mock_repo);
        assert!(matches!(
            service.delete(Uuid::now_v7()).await,
            Err(CategoryError::NotFound(_))
        ));
    }
}
