//! Test builders — ergonomic constructors for `FeedStore` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chirp_core::FeedStore;

/// Fluent builder for [`FeedStore`] test fixtures.
///
/// # Example
///
/// ```rust
/// let store = FeedBuilder::new()
///     .follow("Alice", &["Bob", "Charlie"])
///     .post("Bob", "Hello")
///     .post("Alice", "Good morning")
///     .build();
/// ```
pub struct FeedBuilder {
    store: FeedStore,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self {
            store: FeedStore::new(),
        }
    }

    /// Register `user` with no edges.
    pub fn user(mut self, user: &str) -> Self {
        self.store.add_user(user);
        self
    }

    /// Register `follower` following each of `followees`.
    pub fn follow(mut self, follower: &str, followees: &[&str]) -> Self {
        self.store.add_user(follower);
        for followee in followees {
            self.store.add_follow(follower, followee);
        }
        self
    }

    /// Append a post.
    pub fn post(mut self, author: &str, text: &str) -> Self {
        self.store.add_post(author, text);
        self
    }

    pub fn build(self) -> FeedStore {
        self.store
    }
}

impl Default for FeedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The classic three-poster sample: Ward follows Alan and Martin, Alan
/// follows Martin, three posts in known order.
pub fn sample_store() -> FeedStore {
    FeedBuilder::new()
        .follow("Ward", &["Alan"])
        .follow("Alan", &["Martin"])
        .follow("Ward", &["Martin", "Alan"])
        .post(
            "Alan",
            "If you have a procedure with 10 parameters, you probably missed some.",
        )
        .post(
            "Ward",
            "There are only two hard things in Computer Science: cache invalidation, naming things and off-by-one errors.",
        )
        .post(
            "Alan",
            "Random numbers should not be generated with a method chosen at random.",
        )
        .build()
}
