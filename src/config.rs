use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration, read once at startup. Every field has a default
/// so the binary runs with an empty environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the listener binds to (`BIND_ADDR`).
    pub bind_addr: String,
    /// Display name used on pages and the health probe (`SERVER_NAME`).
    pub server_name: String,
    /// Deep link back to the Telegram bot (`TELEGRAM_BOT_LINK`).
    /// Empty when not configured; pages then omit the link.
    pub bot_link: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let server_name = env::var("SERVER_NAME")
            .ok()
            .or_else(|| hostname::get().ok().and_then(|name| name.into_string().ok()))
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

        let bot_link = env::var("TELEGRAM_BOT_LINK").unwrap_or_default();

        Self {
            bind_addr,
            server_name,
            bot_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        env::remove_var("BIND_ADDR");
        env::remove_var("SERVER_NAME");
        env::remove_var("TELEGRAM_BOT_LINK");

        let config = AppConfig::from_env();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.bot_link.is_empty());
        assert!(!config.server_name.is_empty());
    }
}
