use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL. May embed credentials, so it is never serialized.
    #[serde(skip_serializing, default = "default_database_url")]
    pub url: SecretString,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            // Override with environment variables using `BOOKSTORE__` prefix and `__` separator
            // e.g., BOOKSTORE__DATABASE__URL="sqlite://bookstore.db"
            .add_source(
                config::Environment::with_prefix("BOOKSTORE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn connection_string(&self) -> &str {
        self.url.expose_secret()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

fn default_database_url() -> SecretString {
    "sqlite://bookstore.db".to_string().into()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: 5,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Database URL is skipped during serialization
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8000");
        assert_eq!(config.database.connection_string(), "sqlite://bookstore.db");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn display_never_contains_database_url() {
        let mut config = Config::default();
        config.database.url = "sqlite:///secret/path.db".to_string().into();
        let rendered = config.to_string();
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("127.0.0.1"));
    }
}
