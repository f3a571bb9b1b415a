use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Wraps the API routes with documentation and the cross-cutting layers.
///
/// - Swagger UI at `/swagger-ui`, spec at `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - `probes` (`/health`, `/ready`) merged at the root
/// - request tracing, security headers, optional CORS, compression
/// - JSON 404 fallback
///
/// CORS is installed only when `server_config.cors_allowed_origins` is non-empty.
pub fn create_router<T>(
    apis: Router,
    probes: Router,
    server_config: &ServerConfig,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .merge(probes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match create_cors_layer(&server_config.cors_allowed_origins)? {
        Some(cors) => {
            info!(origins = ?server_config.cors_allowed_origins, "CORS enabled");
            router.layer(cors)
        }
        None => router,
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Serve with coordinated shutdown, then run `cleanup` bounded by `shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        // Err means the sender is gone, which also ends the server
        let _ = shutdown_rx.recv().await;

        info!(?shutdown_timeout, "Starting cleanup");
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => warn!(?shutdown_timeout, "Cleanup exceeded timeout, forcing shutdown"),
        }
    });

    let signal_coordinator = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // Make sure cleanup runs when the server stopped on its own
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
