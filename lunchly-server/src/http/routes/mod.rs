//! Route handlers organized by resource

pub mod assets;
pub mod customers;
pub mod health;
pub mod reservations;

use axum::http::Uri;

use super::error::AppError;

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NoRoute {
        path: uri.path().to_owned(),
    }
}
