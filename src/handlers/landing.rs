use askama_axum::IntoResponse;
use axum::extract::State;
use std::sync::Arc;

use crate::templates::LandingTemplate;
use crate::AppState;

pub async fn landing(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    LandingTemplate {
        server_name: state.config.server_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime(),
        bot_link: state.config.bot_link.clone(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{app, body_string, make_request, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn landing_names_the_server() {
        let response = make_request(app(test_state()), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("test-host"));
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
    }
}
