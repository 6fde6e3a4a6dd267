//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the blog post stores and the fixture generator.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL document store via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;
pub mod fixtures;
pub mod memory;

// Re-exports - In-Memory
pub use fixtures::{LoremFixtures, seed_posts};
pub use memory::InMemoryBlogPostRepository;

// Re-exports - PostgreSQL
pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use database::{PostgresBlogPostRepository, connect};
