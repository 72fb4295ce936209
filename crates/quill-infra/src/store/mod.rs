//! Post store adapters.

mod config;
mod memory;

#[cfg(feature = "mongodb")]
mod document;
#[cfg(feature = "mongodb")]
mod mongo;

pub use config::StoreConfig;
pub use memory::InMemoryPostStore;

#[cfg(feature = "mongodb")]
pub use mongo::MongoPostStore;
