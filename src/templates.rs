use askama::Template;

/// Informational page served at the host root.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub server_name: String,
    pub version: String,
    pub uptime: String,
    pub bot_link: String,
}

/// Shown when the provider redirected back with an authorization code.
/// The user copies the `/setcode` command into the bot chat.
#[derive(Template)]
#[template(path = "auth_success.html")]
pub struct AuthSuccessTemplate {
    pub code: String,
    pub bot_link: String,
}

/// Shown when the provider redirected back with an `error` parameter.
#[derive(Template)]
#[template(path = "auth_error.html")]
pub struct AuthErrorTemplate {
    pub error: String,
    pub state: String,
}

/// Shown when the redirect carried neither a code nor an error.
#[derive(Template)]
#[template(path = "no_code.html")]
pub struct NoCodeTemplate {
    pub raw_query: String,
}
