//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages rendered from askama templates
//! - Request tracing
//! - Graceful shutdown
//! - HTML error pages with matching status codes

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod views;

pub use error::AppError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
