use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::any;
use axum::{Json, Router};
use serde::Serialize;

pub const HELLO_MESSAGE: &str = "CRM sync coming soon if I get a chance:)!";

#[derive(Debug, Serialize)]
struct HelloResponse {
    message: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/api/hello", any(hello))
        .fallback(not_found)
}

async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HelloResponse {
            message: HELLO_MESSAGE,
        }),
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Not Found",
    )
}
