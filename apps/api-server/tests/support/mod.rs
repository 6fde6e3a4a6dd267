//! Shared fixtures for the HTTP tests.
//!
//! Each test acquires its own store through [`TestStore::setup`], which empties and
//! reseeds it, and hands it back through [`TestStore::teardown`]. When
//! `TEST_DATABASE_URL` is set the store is the Postgres table, and tests touching it
//! are serialized through a lock held for the lifetime of the `TestStore`.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use quill_core::RepoError;
use quill_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use quill_core::ports::{BaseRepository, BlogPostRepository, PostFixtures};
use uuid::Uuid;
use quill_infra::{InMemoryBlogPostRepository, LoremFixtures, seed_posts};
use tokio::sync::{Mutex, MutexGuard};

use api_server::AppState;

pub const SEED_COUNT: usize = 10;

static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestStore {
    pub posts: Arc<dyn BlogPostRepository>,
    pub seeded: Vec<BlogPost>,
    _guard: Option<MutexGuard<'static, ()>>,
}

impl TestStore {
    /// Fresh store holding [`SEED_COUNT`] generated posts.
    pub async fn setup() -> Self {
        let (posts, guard) = acquire_store().await;

        // A previous test may have panicked before its teardown ran.
        posts.clear().await.expect("clear store before seeding");

        let mut fixtures = LoremFixtures::new();
        let seeded = seed_posts(posts.as_ref(), &mut fixtures, SEED_COUNT)
            .await
            .expect("seed posts");

        Self {
            posts,
            seeded,
            _guard: guard,
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.posts.clone())
    }

    pub async fn teardown(self) {
        self.posts.clear().await.expect("clear store on teardown");
    }
}

/// A store whose every call fails as if the database went away.
pub struct UnavailableStore;

impl UnavailableStore {
    pub fn state() -> AppState {
        AppState::new(Arc::new(Self))
    }

    fn refused<T>() -> Result<T, RepoError> {
        Err(RepoError::Connection("connection refused".to_string()))
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for UnavailableStore {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Self::refused()
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Self::refused()
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, RepoError> {
        Self::refused()
    }
}

#[async_trait]
impl BlogPostRepository for UnavailableStore {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Self::refused()
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        Self::refused()
    }

    async fn insert(&self, _post: NewBlogPost) -> Result<BlogPost, RepoError> {
        Self::refused()
    }

    async fn insert_many(&self, _posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        Self::refused()
    }

    async fn update(
        &self,
        _id: Uuid,
        _patch: BlogPostPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        Self::refused()
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        Self::refused()
    }
}

/// One valid create payload.
pub fn generate_post() -> NewBlogPost {
    LoremFixtures::new().generate()
}

async fn acquire_store() -> (Arc<dyn BlogPostRepository>, Option<MutexGuard<'static, ()>>) {
    match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => postgres_store(url).await,
        _ => (Arc::new(InMemoryBlogPostRepository::new()), None),
    }
}

#[cfg(feature = "postgres")]
async fn postgres_store(url: String) -> (Arc<dyn BlogPostRepository>, Option<MutexGuard<'static, ()>>) {
    use migration::{Migrator, MigratorTrait};
    use quill_infra::database::{DatabaseConfig, PostgresBlogPostRepository, connect};

    let guard = DB_LOCK.lock().await;

    let mut config = DatabaseConfig::new(url);
    config.max_connections = 2;
    config.min_connections = 1;

    let conn = connect(&config).await.expect("connect to TEST_DATABASE_URL");
    Migrator::up(&conn, None).await.expect("run migrations");

    (Arc::new(PostgresBlogPostRepository::new(conn)), Some(guard))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_store(_url: String) -> (Arc<dyn BlogPostRepository>, Option<MutexGuard<'static, ()>>) {
    (Arc::new(InMemoryBlogPostRepository::new()), None)
}
