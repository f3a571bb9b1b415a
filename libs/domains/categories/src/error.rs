use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category with ID {0} not found")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<sea_orm::DbErr> for CategoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        CategoryError::Database(err.to_string())
    }
}
