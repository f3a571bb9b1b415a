use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Ping the connection pool. Backs the `/ready` probe.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_check_health_against_mock_connection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        assert!(check_health(&db).await.is_ok());
    }
}
