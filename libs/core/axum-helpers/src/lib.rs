//! # Axum Helpers
//!
//! Shared HTTP plumbing for the todo-list service.
//!
//! - **[`envelope`]**: `{message, data}` / `{message, error}` envelopes and the
//!   per-resource action contract
//! - **[`extractors`]**: validating extractors (`ValidatedJson`, `UuidPath`, `PageQuery`)
//! - **[`errors`]**: validation rejections and the 404 fallback
//! - **[`http`]**: CORS and security-header middleware
//! - **[`server`]**: router assembly, health checks, graceful shutdown

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{Action, ActionContract, ApiResponse, ErrorEnvelope, ResourceContract, ResourceMessages};
pub use errors::{FieldError, Location, ValidationRejection};
pub use extractors::{PageQuery, UuidPath, ValidatedJson};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};
