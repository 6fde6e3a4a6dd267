//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::BlogPostRepository;
use quill_infra::database::DatabaseConfig;
use quill_infra::memory::InMemoryBlogPostRepository;

use crate::server::StartupError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBlogPostRepository::new()))
    }

    /// Build the state for the configured store.
    ///
    /// A configured database that cannot be reached is a startup failure.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
            return Ok(Self::in_memory());
        };

        let state = Self::connect(config).await?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        use quill_infra::database::{PostgresBlogPostRepository, connect};

        let conn = connect(config).await.map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            StartupError::StoreUnavailable(e.to_string())
        })?;

        Ok(Self::new(Arc::new(PostgresBlogPostRepository::new(conn))))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &DatabaseConfig) -> Result<Self, StartupError> {
        tracing::warn!("Built without postgres feature - ignoring DATABASE_URL, using in-memory store");
        Ok(Self::in_memory())
    }
}
