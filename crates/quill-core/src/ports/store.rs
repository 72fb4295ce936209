use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Post, PostPatch};
use crate::error::StoreError;

/// Mapping-by-identifier store of posts.
///
/// This is the only seam between the request handlers and persistence.
/// Implementations own the translation between the domain [`Post`] and
/// their native record shape; handlers never see a raw stored record.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Construct a new record, assign its id and creation timestamp, and
    /// persist it. Returns the full stored record.
    async fn insert_one(
        &self,
        author: Author,
        title: String,
        content: String,
    ) -> Result<Post, StoreError>;

    /// All stored posts in the store's natural order. An empty collection
    /// is an empty vec, not an error.
    async fn find(&self) -> Result<Vec<Post>, StoreError>;

    /// Find a post by id. A well-formed but absent id is `None`, never an
    /// error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Apply only the fields supplied in `patch`. Returns the matched count
    /// (0 or 1) so callers can tell "not found" from "updated"; an empty
    /// patch still reports whether the record exists.
    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<u64, StoreError>;

    /// Delete a post by id. Returns the deleted count (0 or 1).
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, StoreError>;

    /// Remove every stored post. Test-fixture reset only.
    async fn drop_all(&self) -> Result<(), StoreError>;
}
