//! Tasks Domain
//!
//! Tasks belong to a category. A task is visible while neither it nor its
//! category is soft-deleted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP routes, envelopes, status table
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, NotFound, category projection
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, status enum
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{PgTaskRepository, TaskService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let service = TaskService::new(PgTaskRepository::new(db));
//! let router: axum::Router = domain_tasks::handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod projection;
pub mod repository;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use handlers::{ApiDoc, TASK_CONTRACT};
pub use models::{CreateTask, Task, TaskDetail, TaskStatus, TaskSummary, UpdateTask};
pub use postgres::PgTaskRepository;
pub use projection::{CategoryProjection, TaskCategory, project_category};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
