use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    /// Never empty while the category is live
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the category is soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn new(input: CreateCategory) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply the supplied fields and refresh `updated_at`.
    pub fn apply_update(&mut self, update: UpdateCategory) {
        if let Some(name) = update.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}

/// List projection of a category; `deletedAt` is never exposed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategorySummary {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateCategory {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// DTO for updating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct UpdateCategory {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_requires_name() {
        let input = CreateCategory {
            name: String::new(),
        };
        assert!(input.validate().is_err());

        let input = CreateCategory {
            name: "Study".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_update_category_requires_name() {
        assert!(UpdateCategory { name: None }.validate().is_err());
        assert!(UpdateCategory { name: Some(String::new()) }.validate().is_err());
        assert!(UpdateCategory { name: Some("Home".into()) }.validate().is_ok());
    }

    #[test]
    fn test_apply_update_refreshes_updated_at() {
        let mut category = Category::new(CreateCategory {
            name: "Study".to_string(),
        });
        let before = category.updated_at;

        category.apply_update(UpdateCategory {
            name: Some("Learning".to_string()),
        });

        assert_eq!(category.name, "Learning");
        assert!(category.updated_at >= before);
        assert_eq!(category.created_at, before);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let category = Category::new(CreateCategory {
            name: "Study".to_string(),
        });
        let json = serde_json::to_value(&category).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("deletedAt").unwrap().is_null());

        let summary = serde_json::to_value(CategorySummary::from(category)).unwrap();
        assert!(summary.get("deletedAt").is_none());
    }
}
