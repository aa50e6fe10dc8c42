//! # Axum Helpers
//!
//! Shared HTTP plumbing for the service binaries.
//!
//! - **[`server`]**: router assembly, liveness endpoint, graceful shutdown
//! - **[`errors`]**: structured error responses with error codes

pub mod errors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use server::{
    HealthResponse, ReadyResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, serve, shutdown_signal,
};
