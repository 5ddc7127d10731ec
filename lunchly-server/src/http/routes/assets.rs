//! Stylesheet, compiled into the binary

use axum::{http::header, response::IntoResponse, routing::get, Router};

const APP_CSS: &str = include_str!("../../../static/app.css");

/// GET /static/app.css
async fn app_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], APP_CSS)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/static/app.css", get(app_css))
}
