//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the document store adapter and its in-memory twin.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongodb` - Document store support via the MongoDB driver

pub mod store;

// Re-exports - In-Memory
pub use store::{InMemoryPostStore, StoreConfig};

#[cfg(feature = "mongodb")]
pub use store::MongoPostStore;
