//! Categories Domain
//!
//! Categories group tasks. They are soft-deleted: a deleted category keeps its row
//! but disappears from every read, and so do its tasks.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::{CategoryService, InMemoryCategoryRepository, handlers};
//!
//! let service = CategoryService::new(InMemoryCategoryRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::{ApiDoc, CATEGORY_CONTRACT};
pub use models::{Category, CategorySummary, CreateCategory, UpdateCategory};
pub use postgres::PgCategoryRepository;
pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use service::CategoryService;
