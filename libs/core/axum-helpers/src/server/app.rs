use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const CORS_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// Combines domain routes with the cross-cutting layers every binary shares.
///
/// - Swagger UI at `/swagger-ui`, spec at `/api-docs/openapi.json`
/// - `apis` merged at the root, so domain routers own their full paths
/// - JSON 404 fallback
/// - request tracing
/// - CORS, only when `CORS_ALLOWED_ORIGIN` is set (comma-separated origins)
///
/// # Errors
/// Returns `InvalidInput` when `CORS_ALLOWED_ORIGIN` is set but empty or
/// contains a value that is not a valid header.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    match std::env::var(CORS_ENV) {
        Ok(origins) => router = router.layer(cors_layer(&origins)?),
        Err(_) => info!("{} not set, CORS layer disabled", CORS_ENV),
    }

    Ok(router)
}

/// Builds a CORS layer for a comma-separated origin list.
pub fn cors_layer(origins: &str) -> io::Result<CorsLayer> {
    let allowed_origins = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ENV, e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be empty", CORS_ENV),
        ));
    }

    info!("CORS configured with allowed origins: {}", origins);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Binds `server_config.address()` and serves until SIGINT/SIGTERM.
///
/// After the signal, `cleanup` runs with `server_config.shutdown_timeout` as
/// its upper bound while in-flight requests drain.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    let coordinator = ShutdownCoordinator::default();
    serve(
        listener,
        router,
        coordinator,
        server_config.shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serves `router` on an already bound listener until `coordinator` fires.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_signal = coordinator.clone();
    let cleanup_handle = tokio::spawn(async move {
        cleanup_signal.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}
