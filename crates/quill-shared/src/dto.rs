//! Data Transfer Objects - request/response types for the API.

use quill_core::DomainError;
use quill_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost};
use serde::{Deserialize, Serialize};

/// Request to create a blog post.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation failure instead of a generic deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl TryFrom<CreateBlogPostRequest> for NewBlogPost {
    type Error = DomainError;

    fn try_from(req: CreateBlogPostRequest) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        if req.title.is_none() {
            missing.push("title");
        }
        if req.content.is_none() {
            missing.push("content");
        }
        if req.author.is_none() {
            missing.push("author");
        }
        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing `{}` in request body",
                missing.join("`, `")
            )));
        }

        let new = NewBlogPost {
            title: req.title.unwrap_or_default(),
            author: req.author.unwrap_or_default(),
            content: req.content.unwrap_or_default(),
        };
        new.validate()?;
        Ok(new)
    }
}

/// Request to update a blog post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    /// When present, must match the id in the path.
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl UpdateBlogPostRequest {
    /// Split into the optional body id and the field patch.
    pub fn into_parts(self) -> (Option<String>, BlogPostPatch) {
        let patch = BlogPostPatch {
            title: self.title,
            author: self.author,
            content: self.content,
        };
        (self.id, patch)
    }
}

/// Public representation of a stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            author: post.author,
            content: post.content,
            created: post.created.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_reports_every_missing_field() {
        let err = NewBlogPost::try_from(CreateBlogPostRequest {
            title: Some("T".to_string()),
            ..Default::default()
        })
        .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("content"));
        assert!(msg.contains("author"));
        assert!(!msg.contains("title"));
    }

    #[test]
    fn test_create_request_rejects_blank_title() {
        let req = CreateBlogPostRequest {
            title: Some("   ".to_string()),
            author: Some(Author::new("A", "B")),
            content: Some("C".to_string()),
        };
        assert!(matches!(
            NewBlogPost::try_from(req),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_update_request_splits_id_from_patch() {
        let req: UpdateBlogPostRequest = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "title": "New Title"
        }))
        .unwrap();

        let (id, patch) = req.into_parts();
        assert_eq!(id.as_deref(), Some("abc"));
        assert_eq!(patch.title.as_deref(), Some("New Title"));
        assert!(patch.content.is_none());
        assert!(patch.author.is_none());
    }

    #[test]
    fn test_response_has_exactly_public_fields() {
        let post = BlogPost::create(NewBlogPost::new("T", Author::new("A", "B"), "C"));
        let json = serde_json::to_value(BlogPostResponse::from(post)).unwrap();

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["author", "content", "created", "id", "title"]);
        assert_eq!(json["author"]["firstName"], "A");
    }
}
