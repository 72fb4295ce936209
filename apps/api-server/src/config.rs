//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use quill_infra::StoreConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: Option<StoreConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let store = env::var("MONGODB_URL").ok().map(|url| StoreConfig {
            url,
            database: env::var("MONGODB_DB").unwrap_or_else(|_| "blog".to_string()),
            max_pool_size: env::var("MONGODB_MAX_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(5),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            store,
        }
    }
}
