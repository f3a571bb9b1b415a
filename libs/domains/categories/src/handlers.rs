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

use crate::models::{Category, CategorySummary, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

pub const TAG: &str = "categories";

/// Status codes and messages for every category action
pub const CATEGORY_CONTRACT: ResourceContract = ResourceContract::standard(
    "category",
    ResourceMessages {
        create: ("Category successfully created", "Failed to create category"),
        get_all: ("Categories fetched successfully", "Failed to fetch categories"),
        get_one: ("Category fetched successfully", "Failed to fetch category"),
        update: ("Category updated successfully", "Failed to update category"),
        delete: ("Category deleted successfully", "Failed to delete category"),
    },
);

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        get_category,
        update_category,
        delete_category,
    ),
    components(schemas(Category, CategorySummary, CreateCategory, UpdateCategory, ErrorEnvelope)),
    tags((name = TAG, description = "Category management endpoints"))
)]
pub struct ApiDoc;

/// Category routes, to be nested under `/categories`
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    Router::new()
        .route("/", get(list_categories::<R>))
        .route("/new", post(create_category::<R>))
        .route("/{id}", get(get_category::<R>))
        .route("/update/{id}", put(update_category::<R>))
        .route("/delete/{id}", delete(delete_category::<R>))
        .with_state(Arc::new(service))
}

/// List categories, oldest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of categories", body = ApiResponse<Paginated<CategorySummary>>),
        (status = 400, description = "Invalid pagination values", body = ErrorEnvelope),
        (status = 500, description = "Failed to fetch categories", body = ErrorEnvelope)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    query: PageQuery,
) -> Response {
    let page = PageRequest::from_parts(query.page, query.limit);
    CATEGORY_CONTRACT.respond(Action::GetAll, service.get_all(page).await)
}

/// Create a category
#[utoipa::path(
    post,
    path = "/new",
    tag = TAG,
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation error or failed insert", body = ErrorEnvelope)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> Response {
    CATEGORY_CONTRACT.respond(Action::Create, service.create(input).await)
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 400, description = "Invalid category ID", body = ErrorEnvelope),
        (status = 404, description = "Category not found", body = ErrorEnvelope)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
) -> Response {
    CATEGORY_CONTRACT.respond(Action::GetOne, service.get_one(id).await)
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 400, description = "Validation error or category not found", body = ErrorEnvelope)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> Response {
    CATEGORY_CONTRACT.respond(Action::Update, service.update(id, input).await)
}

/// Soft delete a category; its tasks become invisible
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 400, description = "Invalid ID or category not found", body = ErrorEnvelope)
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
) -> Response {
    CATEGORY_CONTRACT.respond_empty(Action::Delete, service.delete(id).await)
}
