use axum_helpers::extractors::non_null;
use chrono::{DateTime, Utc};
use domain_categories::Category;
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::projection::{CategoryProjection, TaskCategory, project_category};

/// Task status
///
/// Stored as `varchar(20)`. The PascalCase spellings are accepted on input only.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum TaskStatus {
    /// Task not started
    #[default]
    #[sea_orm(string_value = "pending")]
    #[serde(rename = "pending", alias = "Pending")]
    #[strum(to_string = "pending", serialize = "Pending")]
    Pending,
    /// Task in progress
    #[sea_orm(string_value = "in-progress")]
    #[serde(rename = "in-progress", alias = "InProgress")]
    #[strum(to_string = "in-progress", serialize = "InProgress")]
    InProgress,
    /// Task completed
    #[sea_orm(string_value = "done")]
    #[serde(rename = "done", alias = "Completed")]
    #[strum(to_string = "done", serialize = "Completed")]
    Done,
}

/// Task as loaded from a repository, with its category attached when one was joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub category: Option<Category>,
}

impl Task {
    pub fn new(input: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            status: input.status,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply the supplied fields and refresh `updated_at`.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        self.updated_at = Utc::now();
    }
}

/// Single-task response: every column plus the nested category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub category_id: Uuid,
    pub category: Option<TaskCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskDetail {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            category_id: task.category_id,
            category: project_category(task.category, CategoryProjection::Nested),
            created_at: task.created_at,
            updated_at: task.updated_at,
            deleted_at: task.deleted_at,
        }
    }
}

/// List projection of a task; the category collapses to its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub category: Option<TaskCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskSummary {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            category: project_category(task.category, CategoryProjection::Name),
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// DTO for creating a task
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    pub category_id: Uuid,
}

/// DTO for a partial task update
///
/// Omitted fields are left unchanged; an explicit `null` is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "non_null")]
    pub category_id: Option<Uuid>,
}
