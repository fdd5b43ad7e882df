use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use tokio::fs;

const FAVICON_PATH: &str = "static/favicon.ico";

pub async fn favicon() -> impl IntoResponse {
    match fs::read(FAVICON_PATH).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/x-icon"),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            bytes,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
