//! Fixture generation port - produces valid create payloads for seeding.

use crate::domain::NewBlogPost;

/// Source of generated blog posts, independent of any particular faker.
pub trait PostFixtures: Send {
    /// Produce one valid post payload.
    fn generate(&mut self) -> NewBlogPost;

    /// Produce `n` payloads.
    fn generate_many(&mut self, n: usize) -> Vec<NewBlogPost> {
        (0..n).map(|_| self.generate()).collect()
    }
}
