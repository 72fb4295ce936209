//! MongoDB post store implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use uuid::Uuid;

use quill_core::domain::{Author, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::config::StoreConfig;
use super::document::{PostDocument, set_document};

const COLLECTION: &str = "posts";

/// Post store backed by a MongoDB collection.
pub struct MongoPostStore {
    posts: Collection<PostDocument>,
}

impl MongoPostStore {
    /// Connect to the document store and verify it answers a ping.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        tracing::info!(database = %config.database, "Connecting to document store...");

        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client =
            Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(
            database = %config.database,
            pool = config.max_pool_size,
            "Document store connected"
        );

        Ok(Self {
            posts: database.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn insert_one(
        &self,
        author: Author,
        title: String,
        content: String,
    ) -> Result<Post, StoreError> {
        let post = Post::new(author, title, content);
        tracing::debug!(post_id = %post.id, "Inserting post");

        self.posts
            .insert_one(PostDocument::from(post.clone()))
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(post)
    }

    async fn find(&self) -> Result<Vec<Post>, StoreError> {
        let cursor = self
            .posts
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let documents: Vec<PostDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(documents.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let document = self
            .posts
            .find_one(doc! { "_id": bson::Uuid::from(id) })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(document.map(Post::from))
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<u64, StoreError> {
        // MongoDB rejects an empty $set; an empty patch only asks whether
        // the record exists.
        if patch.is_empty() {
            return self
                .posts
                .count_documents(doc! { "_id": bson::Uuid::from(id) })
                .await
                .map_err(|e| StoreError::Query(e.to_string()));
        }

        let result = self
            .posts
            .update_one(
                doc! { "_id": bson::Uuid::from(id) },
                doc! { "$set": set_document(patch) },
            )
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = self
            .posts
            .delete_one(doc! { "_id": bson::Uuid::from(id) })
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(result.deleted_count)
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        self.posts
            .delete_many(doc! {})
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }
}
