use axum::{
    Router,
    extract::State,
    response::Response,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    Action, ApiResponse, ErrorEnvelope, PageQuery, ResourceContract, ResourceMessages, UuidPath,
    ValidatedJson,
};
use database::{PageRequest, Paginated};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateTask, TaskDetail, TaskStatus, TaskSummary, UpdateTask};
use crate::projection::TaskCategory;
use crate::repository::TaskRepository;
use crate::service::TaskService;

pub const TAG: &str = "tasks";

/// Status codes and messages for every task action
pub const TASK_CONTRACT: ResourceContract = ResourceContract::standard(
    "task",
    ResourceMessages {
        create: ("Task successfully created", "Failed to create task"),
        get_all: ("Tasks fetched successfully", "Failed to fetch tasks"),
        get_one: ("Task fetched successfully", "Failed to fetch task"),
        update: ("Task updated successfully", "Failed to update task"),
        delete: ("Task deleted successfully", "Failed to delete task"),
    },
);

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(schemas(
        TaskDetail,
        TaskSummary,
        TaskCategory,
        TaskStatus,
        CreateTask,
        UpdateTask,
        ErrorEnvelope
    )),
    tags((name = TAG, description = "Task management endpoints"))
)]
pub struct ApiDoc;

/// Task routes, to be nested under `/tasks`
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    Router::new()
        .route("/", get(list_tasks::<R>))
        .route("/new", post(create_task::<R>))
        .route("/{id}", get(get_task::<R>))
        .route("/update/{id}", put(update_task::<R>))
        .route("/delete/{id}", delete(delete_task::<R>))
        .with_state(Arc::new(service))
}

/// List tasks, oldest first, with category names
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of tasks", body = ApiResponse<Paginated<TaskSummary>>),
        (status = 400, description = "Invalid pagination values", body = ErrorEnvelope),
        (status = 500, description = "Failed to fetch tasks", body = ErrorEnvelope)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    query: PageQuery,
) -> Response {
    let page = PageRequest::from_parts(query.page, query.limit);
    TASK_CONTRACT.respond(Action::GetAll, service.get_all(page).await)
}

/// Create a task under an existing category
#[utoipa::path(
    post,
    path = "/new",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = ApiResponse<TaskDetail>),
        (status = 400, description = "Validation error or unknown category", body = ErrorEnvelope)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> Response {
    TASK_CONTRACT.respond(Action::Create, service.create(input).await)
}

/// Get a task by ID with its category
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task found", body = ApiResponse<TaskDetail>),
        (status = 400, description = "Invalid task ID", body = ErrorEnvelope),
        (status = 404, description = "Task not found", body = ErrorEnvelope)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> Response {
    TASK_CONTRACT.respond(Action::GetOne, service.get_one(id).await)
}

/// Partially update a task
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Task ID")),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated", body = ApiResponse<TaskDetail>),
        (status = 400, description = "Validation error, unknown category or task not found", body = ErrorEnvelope)
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> Response {
    TASK_CONTRACT.respond(Action::Update, service.update(id, input).await)
}

/// Soft delete a task
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted"),
        (status = 400, description = "Invalid ID or task not found", body = ErrorEnvelope)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> Response {
    TASK_CONTRACT.respond_empty(Action::Delete, service.delete(id).await)
}
