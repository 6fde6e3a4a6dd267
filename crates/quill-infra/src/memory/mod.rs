//! In-memory store implementations - used when no database is configured.

mod blog_post;

pub use blog_post::InMemoryBlogPostRepository;
