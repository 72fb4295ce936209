//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;
use quill_infra::StoreConfig;

#[cfg(feature = "mongodb")]
use quill_infra::MongoPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub store_backend: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(store_config: Option<&StoreConfig>) -> Self {
        #[cfg(feature = "mongodb")]
        let (posts, store_backend): (Arc<dyn PostStore>, &'static str) = {
            if let Some(config) = store_config {
                match MongoPostStore::connect(config).await {
                    Ok(store) => (Arc::new(store), "mongodb"),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to document store: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostStore::new()), "memory")
                    }
                }
            } else {
                tracing::warn!("MONGODB_URL not set. Running without MongoDB (in-memory mode).");
                (Arc::new(InMemoryPostStore::new()), "memory")
            }
        };

        #[cfg(not(feature = "mongodb"))]
        let (posts, store_backend): (Arc<dyn PostStore>, &'static str) = {
            if store_config.is_some() {
                tracing::warn!("MONGODB_URL is set but the mongodb feature is disabled.");
            }
            tracing::info!("Running without mongodb feature - using in-memory store");
            (Arc::new(InMemoryPostStore::new()), "memory")
        };

        tracing::info!(backend = store_backend, "Application state initialized");

        Self {
            posts,
            store_backend,
        }
    }
}
