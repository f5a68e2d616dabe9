//! Server configuration from the environment.

const DEFAULT_BIND: &str = "127.0.0.1:10020";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind, `WAYFARE_BIND`.
    pub bind: String,
    /// Externally visible base URL used in the agent card,
    /// `WAYFARE_BASE_URL`. Defaults to `http://{bind}`.
    pub base_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind = std::env::var("WAYFARE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let base_url =
            std::env::var("WAYFARE_BASE_URL").unwrap_or_else(|_| format!("http://{bind}"));
        Self { bind, base_url }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            base_url: format!("http://{DEFAULT_BIND}"),
        }
    }
}
