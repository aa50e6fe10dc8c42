//! Server infrastructure: router assembly, liveness endpoint and
//! graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &ServerConfig::default(), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve};
pub use health::{HealthResponse, ReadyResponse, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
