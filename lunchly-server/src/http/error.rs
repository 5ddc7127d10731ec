//! Page error type with IntoResponse
//!
//! Errors are rendered as HTML error pages with the matching status code.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::views::{self, ErrorPage};
use crate::models::ValidationError;
use crate::Error;

/// Error returned by page handlers
#[derive(Debug)]
pub enum AppError {
    /// Bad form input (400)
    Validation(ValidationError),

    /// Unknown customer or reservation (404)
    NotFound { resource: &'static str, id: String },

    /// No route for the path (404)
    NoRoute { path: String },

    /// Database error (500, logged)
    Database(sqlx::Error),

    /// Template failed to render (500, logged)
    Render(askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::NoRoute { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the user. Internal failures stay generic.
    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => format!("No such {}: {}", resource, id),
            Self::NoRoute { path } => format!("Nothing lives at {}", path),
            Self::Database(_) | Self::Render(_) => "An internal error occurred.".to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Render(e) => tracing::error!("Template error: {}", e),
            _ => {}
        }

        let status = self.status();
        let page = ErrorPage {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: self.message(),
        };

        match views::render_html(&page) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Template error while rendering error page: {}", e);
                (status, page.message).into_response()
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        Self::Render(e)
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        match e {
            Error::Validation(e) => Self::Validation(e),
            Error::NotFound { resource, id } => Self::NotFound { resource, id },
            Error::Store(e) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = AppError::Validation(ValidationError::Empty { field: "first name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404_with_message() {
        let err = AppError::from(Error::not_found("customer", 12));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("No such customer: 12"));
    }

    #[tokio::test]
    async fn database_error_is_500_and_generic() {
        let err = AppError::from(Error::Store(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("An internal error occurred."));
        assert!(!body.contains("RowNotFound"));
    }
}
