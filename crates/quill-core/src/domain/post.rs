use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post author - persisted as a composite of first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Derive the single author string exposed on the wire.
    ///
    /// The derivation is one-way: nothing converts the joined string back
    /// into its parts, and no API operation modifies author fields after
    /// creation.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a blog post as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated id and creation timestamp.
    ///
    /// `id` and `created` are assigned here, at the store boundary, and are
    /// immutable from then on.
    pub fn new(author: Author, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: Utc::now(),
        }
    }
}

/// Partial update to a post: only the supplied fields change.
///
/// Author and creation metadata are deliberately absent here - they cannot
/// be updated.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Apply the supplied fields to `post`, leaving the rest untouched.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[test]
    fn test_full_name_derivation() {
        assert_eq!(author().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_new_post_assigns_id_and_created() {
        let a = Post::new(author(), "T".to_string(), "C".to_string());
        let b = Post::new(author(), "T".to_string(), "C".to_string());
        assert_ne!(a.id, b.id);
        assert!(a.created <= Utc::now());
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut post = Post::new(author(), "old title".to_string(), "old content".to_string());
        let patch = PostPatch {
            title: Some("new title".to_string()),
            content: None,
        };
        patch.apply(&mut post);

        assert_eq!(post.title, "new title");
        assert_eq!(post.content, "old content");
        assert_eq!(post.author, author());
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut post = Post::new(author(), "title".to_string(), "content".to_string());
        let before = post.clone();

        let patch = PostPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut post);

        assert_eq!(post.title, before.title);
        assert_eq!(post.content, before.content);
    }
}
