use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend, served for every non-API path.
    pub static_dir: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}:{}: {}", self.host, self.port, e))?;
        Ok(addr)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// OpenAI-compatible endpoint.
    pub api_base: String,
    pub model: String,
    /// Name of the environment variable holding the key.
    pub api_key_env: String,
    pub temperature: f64,
    pub max_tokens: i32,
}

/// Accepted when the configured variable is unset.
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[chat]
api_base = "https://generativelanguage.googleapis.com/v1beta/openai"
model = "gemini-2.5-flash"
api_key_env = "GEMINI_API_KEY"
temperature = 0.7
max_tokens = 1024
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Make the loaded configuration available to handlers. Later calls are ignored.
pub fn install(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already installed, keeping the first one");
    }
}

/// Installed configuration, or the embedded default when nothing was installed.
pub fn get() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(|| toml::from_str(DEFAULT_CONFIG).map_err(anyhow::Error::from))
}

/// Look up the API key through `lookup` (normally `std::env::var`).
/// Blank values count as missing.
pub fn resolve_api_key<F>(chat: &ChatConfig, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [chat.api_key_env.as_str(), LEGACY_API_KEY_ENV]
        .into_iter()
        .filter_map(|name| lookup(name))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.chat.model, "gemini-2.5-flash");
        assert_eq!(config.chat.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_socket_addr() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let addr = config.server.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_resolve_api_key() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();

        let key = resolve_api_key(&config.chat, |name| match name {
            "GEMINI_API_KEY" => Some("primary".to_string()),
            "API_KEY" => Some("legacy".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("primary"));

        let key = resolve_api_key(&config.chat, |name| match name {
            "GEMINI_API_KEY" => Some("   ".to_string()),
            "API_KEY" => Some("legacy".to_string()),
            _ => None,
        });
        assert_eq!(key.as_deref(), Some("legacy"));

        assert_eq!(resolve_api_key(&config.chat, |_| None), None);
    }
}
