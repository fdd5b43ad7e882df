mod config;
mod handlers;
mod templates;

use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            started_at: Utc::now(),
        }
    }

    pub fn uptime(&self) -> String {
        format_uptime((Utc::now() - self.started_at).num_seconds())
    }
}

fn format_uptime(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::landing::landing))
        .route("/health", get(handlers::health::health_check))
        .route("/callback", get(handlers::callback::callback_handler))
        .route("/favicon.ico", get(handlers::static_files::favicon))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env();
    info!(
        "{} v{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.server_name
    );

    let state = Arc::new(AppState::new(config));
    let app = app(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr)
        .await
        .expect("Failed to bind listener");

    info!("Callback server started on http://{}", state.config.bind_addr);

    axum::serve(listener, app).await.expect("Server failed");
}

#[cfg(test)]
pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        server_name: "test-host".to_string(),
        bot_link: String::new(),
    }))
}

#[cfg(test)]
pub async fn make_request(
    app: Router,
    path: &str,
) -> axum::http::Response<axum::body::Body> {
    use tower::util::ServiceExt;

    app.oneshot(
        axum::http::Request::builder()
            .uri(path)
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[cfg(test)]
pub async fn body_string(response: axum::http::Response<axum::body::Body>) -> String {
    use http_body_util::BodyExt;

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3_600), "1h 0m");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[test]
    fn uptime_never_negative() {
        assert_eq!(format_uptime(-5), "0s");
    }
}
