use axum::{Router, routing::get};

use crate::state::AppState;

pub mod categories;
pub mod health;
pub mod tasks;

/// API routes without the `/api` prefix, which `create_router` adds.
///
/// Every sub-router already has its state applied.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/categories", categories::router(state))
        .nest("/tasks", tasks::router(state))
}

/// `/ready`, checked against the live database pool
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
