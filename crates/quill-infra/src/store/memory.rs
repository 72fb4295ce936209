//! In-memory post store - used as fallback when no document store is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Author, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// In-memory post store using a simple HashMap with an async RwLock.
///
/// This is the fallback implementation when the document store is not
/// configured, and the store handler tests run against.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert_one(
        &self,
        author: Author,
        title: String,
        content: String,
    ) -> Result<Post, StoreError> {
        let post = Post::new(author, title, content);
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<u64, StoreError> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(&id) {
            Some(post) => {
                patch.apply(post);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut posts = self.posts.write().await;
        Ok(posts.remove(&id).map_or(0, |_| 1))
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        self.posts.write().await.clear();
        Ok(())
    }
}
