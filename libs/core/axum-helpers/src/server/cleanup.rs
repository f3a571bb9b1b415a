use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Close the PostgreSQL pool, logging the outcome.
pub async fn close_postgres(db: DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!(connection = name, "PostgreSQL connection closed"),
        Err(e) => error!(connection = name, "Error closing PostgreSQL connection: {e}"),
    }
}
