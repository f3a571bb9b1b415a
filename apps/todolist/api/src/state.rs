//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into the routers that need it; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool shared by every repository
    pub db: DatabaseConnection,
}
