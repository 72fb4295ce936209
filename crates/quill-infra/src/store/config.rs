use std::time::Duration;

/// Configuration for the document store connection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    pub url: String,
    /// Database holding the `posts` collection.
    pub database: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    /// How long to wait for a reachable server before an operation fails.
    pub server_selection_timeout: Duration,
}
