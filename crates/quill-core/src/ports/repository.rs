use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait defining the id-keyed operations every store has.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Total number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Delete an entity by its ID. Returns whether anything was removed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Blog post document store.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, oldest first (ties broken by id).
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Any single post, or `None` when the store is empty.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Store a new post; the store assigns `id` and `created`.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Store a batch of new posts.
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Apply a partial update. Returns the updated post, or `None` if `id` is unknown.
    async fn update(&self, id: Uuid, patch: BlogPostPatch)
    -> Result<Option<BlogPost>, RepoError>;

    /// Remove every post. Used for test teardown.
    async fn clear(&self) -> Result<u64, RepoError>;
}
