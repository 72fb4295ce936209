//! # Quill Shared
//!
//! Wire types shared between the server and API clients: request DTOs,
//! the rendered post shape, and the error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
