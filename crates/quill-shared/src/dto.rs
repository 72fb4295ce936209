//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Author fields accepted when creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: AuthorInput,
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    /// Reject empty required fields.
    ///
    /// Missing fields never reach this check - deserialization reports
    /// them by name. `content` only has to be present; it may be empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty");
        }
        if self.author.first_name.trim().is_empty() {
            return Err("author.firstName must not be empty");
        }
        if self.author.last_name.trim().is_empty() {
            return Err("author.lastName must not be empty");
        }
        Ok(())
    }
}

/// Request to update a post.
///
/// Only `title` and `content` are updatable. `id`, when present, must match
/// the path id; author fields are not accepted at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A post as rendered to API callers.
///
/// Exactly these five keys, always together. `author` is the derived
/// "first last" string, never the stored composite; `created` is an
/// RFC 3339 timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created: String,
    pub author: String,
}
