use axum::Router;
use domain_tasks::{PgTaskRepository, TaskService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgTaskRepository::new(state.db.clone());
    handlers::router(TaskService::new(repository))
}
