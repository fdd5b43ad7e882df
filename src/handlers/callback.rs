use axum::{
    extract::{Query, RawQuery, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::templates::{AuthErrorTemplate, AuthSuccessTemplate, NoCodeTemplate};
use crate::AppState;

/// Query parameters the provider appends to the redirect URI.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Landing page for the OAuth redirect. Always answers 200; a query string
/// the typed extractor cannot parse falls through to the no-code page with
/// the raw query echoed.
pub async fn callback_handler(
    State(state): State<Arc<AppState>>,
    params: Option<Query<CallbackParams>>,
    RawQuery(raw_query): RawQuery,
) -> Response {
    let params = params.map(|Query(params)| params).unwrap_or_default();

    if let Some(error) = params.error {
        warn!("authorization rejected by provider: {}", error);
        return AuthErrorTemplate {
            error,
            state: params.state.unwrap_or_default(),
        }
        .into_response();
    }

    if let Some(code) = params.code {
        // The code is a single-use secret, keep it out of the logs.
        info!("authorization code received ({} chars)", code.len());
        return AuthSuccessTemplate {
            code,
            bot_link: state.config.bot_link.clone(),
        }
        .into_response();
    }

    info!("callback hit without code or error");
    NoCodeTemplate {
        raw_query: raw_query.unwrap_or_default(),
    }
    .into_response()
}
