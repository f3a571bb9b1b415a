/// Error type for connection management and bootstrap operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors surfaced by SeaORM
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
