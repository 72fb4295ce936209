//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate contains the post entity and the store port. It has no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
