use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    name: String,
    version: &'static str,
    started_at: String,
    uptime: String,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        name: state.config.server_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at.to_rfc3339(),
        uptime: state.uptime(),
    })
}

#[cfg(test)]
mod tests {
    use crate::{app, body_string, make_request, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_reports_ok() {
        let response = make_request(app(test_state()), "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["name"], "test-host");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }
}
