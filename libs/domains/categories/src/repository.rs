use async_trait::async_trait;
use chrono::Utc;
use database::PageRequest;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, UpdateCategory};

/// Repository trait for Category persistence.
///
/// Every read and write ignores soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Find a live category by ID
    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>>;

    /// One page of live categories, oldest first, plus the total count of live rows
    async fn list(&self, page: PageRequest) -> CategoryResult<(Vec<Category>, u64)>;

    /// Apply a partial update to a live category. `false` when no row matched.
    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<bool>;

    /// Stamp `deleted_at` on a live category. `false` when no row matched.
    async fn soft_delete(&self, id: Uuid) -> CategoryResult<bool>;
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let category = Category::new(input);
        self.categories
            .write()
            .await
            .insert(category.id, category.clone());

        tracing::info!(category_id = %category.id, "Created category");
        Ok(category)
    }

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).filter(|c| !c.is_deleted()).cloned())
    }

    async fn list(&self, page: PageRequest) -> CategoryResult<(Vec<Category>, u64)> {
        let categories = self.categories.read().await;

        let mut live: Vec<Category> = categories
            .values()
            .filter(|c| !c.is_deleted())
            .cloned()
            .collect();
        live.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let total = live.len() as u64;
        let data = live
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
            .collect();

        Ok((data, total))
    }

    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<bool> {
        let mut categories = self.categories.write().await;

        match categories.get_mut(&id).filter(|c| !c.is_deleted()) {
            Some(category) => {
                category.apply_update(input);
                tracing::info!(category_id = %id, "Updated category");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: Uuid) -> CategoryResult<bool> {
        let mut categories = self.categories.write().await;

        match categories.get_mut(&id).filter(|c| !c.is_deleted()) {
            Some(category) => {
                category.deleted_at = Some(Utc::now());
                tracing::info!(category_id = %id, "Soft deleted category");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
