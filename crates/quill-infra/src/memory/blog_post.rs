//! In-memory blog post store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogPostRepository};

/// Blog post store backed by a `HashMap` behind an async `RwLock`.
///
/// Each write holds the lock for the whole document, so per-post updates are atomic.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn sorted(store: &HashMap<Uuid, BlogPost>) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        posts
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.len() as u64)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id).is_some())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(Self::sorted(&store))
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(Self::sorted(&store).into_iter().next())
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::create(post);
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());

        tracing::debug!(post_id = %post.id, "Inserted blog post");
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let created: Vec<BlogPost> = posts.into_iter().map(BlogPost::create).collect();
        let mut store = self.store.write().await;
        for post in &created {
            store.insert(post.id, post.clone());
        }

        tracing::debug!(count = created.len(), "Inserted blog post batch");
        Ok(created)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: BlogPostPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply(post);
        Ok(Some(post.clone()))
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::Author;

    fn new_post(title: &str) -> NewBlogPost {
        NewBlogPost::new(title, Author::new("Grace", "Hopper"), "content")
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.insert(new_post("Hello")).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found, post);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_many_and_find_all_agree_with_count() {
        let repo = InMemoryBlogPostRepository::new();
        let posts = (0..5).map(|i| new_post(&format!("post {i}"))).collect();
        repo.insert_many(posts).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len() as u64, repo.count().await.unwrap());
        assert!(all.windows(2).all(|w| w[0].created <= w[1].created));
    }

    #[tokio::test]
    async fn test_update_touches_only_supplied_fields() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.insert(new_post("Before")).await.unwrap();

        let patch = BlogPostPatch {
            content: Some("changed content".to_string()),
            ..Default::default()
        };
        let updated = repo.update(post.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "Before");
        assert_eq!(updated.content, "changed content");
        assert_eq!(updated.created, post.created);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryBlogPostRepository::new();
        let result = repo
            .update(Uuid::new_v4(), BlogPostPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_stable() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.insert(new_post("Doomed")).await.unwrap();

        assert!(repo.delete(post.id).await.unwrap());
        assert!(!repo.delete(post.id).await.unwrap());
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let repo = InMemoryBlogPostRepository::new();
        repo.insert_many(vec![new_post("a"), new_post("b")])
            .await
            .unwrap();

        assert_eq!(repo.clear().await.unwrap(), 2);
        assert!(repo.find_one().await.unwrap().is_none());
    }
}
