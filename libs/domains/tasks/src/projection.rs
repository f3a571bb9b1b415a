//! How a task's category is rendered in responses.

use domain_categories::Category;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Requested category shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryProjection {
    /// The category's name (task lists)
    Name,
    /// The whole category object (single task)
    Nested,
}

/// A task's category as it appears on the wire: a bare name or the full object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum TaskCategory {
    Name(String),
    Nested(Category),
}

/// Render `category` in the requested shape; a task without a category stays `None`.
pub fn project_category(
    category: Option<Category>,
    projection: CategoryProjection,
) -> Option<TaskCategory> {
    category.map(|category| match projection {
        CategoryProjection::Name => TaskCategory::Name(category.name),
        CategoryProjection::Nested => TaskCategory::Nested(category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn study() -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::now_v7(),
            name: "Study".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_name_projection() {
        let projected = project_category(Some(study()), CategoryProjection::Name);
        assert_eq!(projected, Some(TaskCategory::Name("Study".to_string())));
        assert_eq!(serde_json::to_value(projected).unwrap(), "Study");
    }

    #[test]
    fn test_nested_projection_keeps_every_field() {
        let category = study();
        let projected = project_category(Some(category.clone()), CategoryProjection::Nested);
        assert_eq!(projected, Some(TaskCategory::Nested(category.clone())));

        let json = serde_json::to_value(projected).unwrap();
        assert_eq!(json["id"], category.id.to_string());
        assert_eq!(json["name"], "Study");
        assert!(json["deletedAt"].is_null());
    }

    #[test]
    fn test_missing_category_stays_none() {
        assert_eq!(project_category(None, CategoryProjection::Name), None);
        assert_eq!(project_category(None, CategoryProjection::Nested), None);
    }
}
