use async_trait::async_trait;
use chrono::Utc;
use database::PageRequest;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::CategoryResult,
    models::{Category, CreateCategory, UpdateCategory},
    repository::CategoryRepository,
};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn live() -> sea_orm::Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::DeletedAt.is_null())
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(category_id = %model.id, "Created category");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        let model = Self::live()
            .filter(entity::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self, page: PageRequest) -> CategoryResult<(Vec<Category>, u64)> {
        let total = Self::live().count(&self.db).await?;

        let models = Self::live()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<bool> {
        let mut changes = entity::ActiveModel {
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };
        if let Some(name) = input.name {
            changes.name = Set(name);
        }

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(category_id = %id, "Updated category");
        }
        Ok(result.rows_affected > 0)
    }

    async fn soft_delete(&self, id: Uuid) -> CategoryResult<bool> {
        let changes = entity::ActiveModel {
            deleted_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(category_id = %id, "Soft deleted category");
        }
        Ok(result.rows_affected > 0)
    }
}
