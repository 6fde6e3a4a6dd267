//! Random blog post generation for seeding stores.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quill_core::domain::{Author, BlogPost, NewBlogPost};
use quill_core::error::RepoError;
use quill_core::ports::{BlogPostRepository, PostFixtures};

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "commodo", "consequat", "duis", "aute", "irure", "voluptate", "velit", "esse",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Hedy", "John", "Ken",
    "Linus", "Margaret", "Niklaus", "Radia", "Tony",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Dijkstra", "Hamilton", "Hoare", "Hopper", "Lamarr", "Liskov", "Lovelace",
    "McCarthy", "Perlman", "Ritchie", "Thompson", "Torvalds", "Turing", "Wirth",
];

/// Lorem-ipsum style generator backed by `rand`.
pub struct LoremFixtures {
    rng: StdRng,
}

impl LoremFixtures {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator, for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, list: &[&'static str]) -> &'static str {
        list.choose(&mut self.rng).copied().unwrap_or("lorem")
    }

    fn words(&mut self, min: usize, max: usize) -> Vec<&'static str> {
        let n = self.rng.gen_range(min..=max);
        (0..n).map(|_| self.pick(WORDS)).collect()
    }

    fn sentence(&mut self) -> String {
        let mut sentence = self.words(4, 10).join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    fn paragraph(&mut self) -> String {
        let n = self.rng.gen_range(3..=6);
        (0..n)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for LoremFixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl PostFixtures for LoremFixtures {
    fn generate(&mut self) -> NewBlogPost {
        let title = self.words(2, 5).join(" ");
        let author = Author::new(self.pick(FIRST_NAMES), self.pick(LAST_NAMES));
        let content = self.paragraph();
        NewBlogPost::new(title, author, content)
    }
}

/// Insert `n` generated posts into `repo` in one batch.
pub async fn seed_posts(
    repo: &dyn BlogPostRepository,
    fixtures: &mut dyn PostFixtures,
    n: usize,
) -> Result<Vec<BlogPost>, RepoError> {
    tracing::info!(count = n, "Seeding blog posts");
    repo.insert_many(fixtures.generate_many(n)).await
}
