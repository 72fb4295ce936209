//! Post document shape for the MongoDB collection.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};

use quill_core::domain::{Author, Post, PostPatch};

/// Author as persisted inside a post document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthorDocument {
    pub first_name: String,
    pub last_name: String,
}

/// Post as persisted in the `posts` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostDocument {
    #[serde(rename = "_id")]
    pub id: bson::Uuid,
    pub author: AuthorDocument,
    pub title: String,
    pub content: String,
    pub created: bson::DateTime,
}

/// Conversion from domain Post to the persisted document.
impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            author: AuthorDocument {
                first_name: post.author.first_name,
                last_name: post.author.last_name,
            },
            title: post.title,
            content: post.content,
            created: bson::DateTime::from_chrono(post.created),
        }
    }
}

/// Conversion from the persisted document to the domain Post.
impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            id: document.id.into(),
            author: Author {
                first_name: document.author.first_name,
                last_name: document.author.last_name,
            },
            title: document.title,
            content: document.content,
            created: document.created.to_chrono(),
        }
    }
}

/// Build the `$set` document for a partial update.
///
/// Only the fields supplied in the patch appear; everything else in the
/// stored record stays untouched.
pub(crate) fn set_document(patch: PostPatch) -> Document {
    let mut set = Document::new();
    if let Some(title) = patch.title {
        set.insert("title", title);
    }
    if let Some(content) = patch.content {
        set.insert("content", content);
    }
    set
}
