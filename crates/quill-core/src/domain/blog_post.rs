use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post, stored as an embedded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// BlogPost entity - a persisted blog post.
///
/// `id` and `created` are assigned once, when the post is first stored,
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Materialize a new post from a create payload, assigning id and timestamp.
    ///
    /// `created` is truncated to microseconds, the finest precision every store keeps.
    pub fn create(new: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            author: new.author,
            content: new.content,
            created: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Payload for creating a post. Has no `id` or `created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub author: Author,
    pub content: String,
}

impl NewBlogPost {
    pub fn new(title: impl Into<String>, author: Author, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author,
            content: content.into(),
        }
    }

    /// Check that the required text fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }
}

/// Partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.content.is_none()
    }

    /// Overwrite the supplied fields on `post`. `id` and `created` are untouched.
    pub fn apply(&self, post: &mut BlogPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(author) = &self.author {
            post.author = author.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost::create(NewBlogPost::new(
            "Original",
            Author::new("Ada", "Lovelace"),
            "Body",
        ))
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut post = sample();
        let before = post.clone();

        let patch = BlogPostPatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        };
        patch.apply(&mut post);

        assert_eq!(post.title, "New Title");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert_eq!(post.id, before.id);
        assert_eq!(post.created, before.created);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut post = sample();
        let before = post.clone();
        let patch = BlogPostPatch::default();

        assert!(patch.is_empty());
        patch.apply(&mut post);
        assert_eq!(post, before);
    }

    #[test]
    fn test_validate_reports_blank_fields() {
        let new = NewBlogPost::new("  ", Author::default(), "");
        let err = new.validate().unwrap_err();
        assert!(err.to_string().contains("title, content"));
    }

    #[test]
    fn test_author_serializes_camel_case() {
        let json = serde_json::to_value(Author::new("A", "B")).unwrap();
        assert_eq!(json, serde_json::json!({"firstName": "A", "lastName": "B"}));
    }
}
