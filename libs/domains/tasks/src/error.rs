use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task with ID {0} not found")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// The task points at a category that does not exist or is deleted
    #[error("{0}")]
    Referential(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl TaskError {
    pub fn missing_category(category_id: Uuid) -> Self {
        TaskError::Referential(format!("Category with ID {category_id} not found"))
    }
}

pub type TaskResult<T> = Result<T, TaskError>;

impl From<DbErr> for TaskError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => TaskError::Referential(detail),
            _ => TaskError::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let id = Uuid::now_v7();
        assert_eq!(
            TaskError::NotFound(id).to_string(),
            format!("Task with ID {id} not found")
        );
        assert_eq!(
            TaskError::missing_category(id).to_string(),
            format!("Category with ID {id} not found")
        );
    }

    #[test]
    fn test_unclassified_db_error_is_database() {
        let err = TaskError::from(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, TaskError::Database(msg) if msg.contains("connection reset")));
    }
}
