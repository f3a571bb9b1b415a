use async_trait::async_trait;
use chrono::Utc;
use database::PageRequest;
use domain_categories::entity as category;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Select, SelectTwo,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, UpdateTask},
    repository::TaskRepository,
};

/// PostgreSQL implementation of TaskRepository
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Visible tasks joined with their category
    fn visible() -> SelectTwo<entity::Entity, category::Entity> {
        entity::Entity::find()
            .find_also_related(category::Entity)
            .filter(entity::Column::DeletedAt.is_null())
            .filter(category::Column::DeletedAt.is_null())
    }

    fn live_categories() -> Select<category::Entity> {
        category::Entity::find().filter(category::Column::DeletedAt.is_null())
    }

    async fn require_category(&self, id: Uuid) -> TaskResult<category::Model> {
        Self::live_categories()
            .filter(category::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .ok_or_else(|| TaskError::missing_category(id))
    }

    /// Update the visible task `id`; zero rows when it is hidden or gone.
    async fn update_visible(&self, id: Uuid, changes: entity::ActiveModel) -> TaskResult<u64> {
        let live_category_ids = Self::live_categories()
            .select_only()
            .column(category::Column::Id)
            .into_query();

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null())
            .filter(entity::Column::CategoryId.in_subquery(live_category_ids))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn into_task((model, category): (entity::Model, Option<category::Model>)) -> Task {
    Task::from(model).with_category(category.map(Into::into))
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let category = self.require_category(input.category_id).await?;

        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = %model.id, category_id = %category.id, "Created task");
        Ok(into_task((model, Some(category))))
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let row = Self::visible()
            .filter(entity::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(row.map(into_task))
    }

    async fn list(&self, page: PageRequest) -> TaskResult<(Vec<Task>, u64)> {
        let total = entity::Entity::find()
            .join(JoinType::InnerJoin, entity::Relation::Category.def())
            .filter(entity::Column::DeletedAt.is_null())
            .filter(category::Column::DeletedAt.is_null())
            .count(&self.db)
            .await?;

        let rows = Self::visible()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok((rows.into_iter().map(into_task).collect(), total))
    }

    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<bool> {
        let mut changes = entity::ActiveModel {
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };
        if let Some(title) = input.title {
            changes.title = Set(title);
        }
        if let Some(description) = input.description {
            changes.description = Set(Some(description));
        }
        if let Some(status) = input.status {
            changes.status = Set(status);
        }
        if let Some(category_id) = input.category_id {
            self.require_category(category_id).await?;
            changes.category_id = Set(category_id);
        }

        let rows_affected = self.update_visible(id, changes).await?;
        if rows_affected > 0 {
            tracing::info!(task_id = %id, "Updated task");
        }
        Ok(rows_affected > 0)
    }

    async fn soft_delete(&self, id: Uuid) -> TaskResult<bool> {
        let changes = entity::ActiveModel {
            deleted_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        let rows_affected = self.update_visible(id, changes).await?;
        if rows_affected > 0 {
            tracing::info!(task_id = %id, "Soft deleted task");
        }
        Ok(rows_affected > 0)
    }
}
