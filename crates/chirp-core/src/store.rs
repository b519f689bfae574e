//! Store — the feed dataset built by the loaders and read by the renderer.
//!
//! The store is the single source of truth; the renderer reads from it,
//! never from the input files directly. It is built once during load and
//! never mutated afterwards.

use std::collections::{BTreeSet, HashSet};

use crate::types::Post;

/// All data the renderer needs: who is known, who follows whom, and every
/// post in file order.
///
/// Known users are kept in a `BTreeSet`, so [`FeedStore::users`] iterates in
/// ascending lexicographic order without a separate sort. Follow edges are a
/// `HashSet` of `(follower, followee)` pairs; inserting the same edge twice
/// collapses to one.
#[derive(Debug, Default, Clone)]
pub struct FeedStore {
    users: BTreeSet<String>,
    follows: HashSet<(String, String)>,
    posts: Vec<Post>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user` as known. Idempotent.
    pub fn add_user(&mut self, user: &str) {
        if !self.users.contains(user) {
            self.users.insert(user.to_string());
        }
    }

    /// Record that `follower` follows `followee`, registering both as known.
    pub fn add_follow(&mut self, follower: &str, followee: &str) {
        self.add_user(follower);
        self.add_user(followee);
        self.follows
            .insert((follower.to_string(), followee.to_string()));
    }

    /// Append a post, registering its author as known. Posts keep the order
    /// they were added in.
    pub fn add_post(&mut self, author: &str, text: &str) {
        self.add_user(author);
        self.posts.push(Post::new(author, text));
    }

    /// Known users in ascending lexicographic order.
    pub fn users(&self) -> impl Iterator<Item = &str> + '_ {
        self.users.iter().map(String::as_str)
    }

    /// Every post, in original file order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Does `follower` follow `followee`?
    pub fn follows(&self, follower: &str, followee: &str) -> bool {
        // HashSet<(String, String)> cannot be probed with a (&str, &str) key,
        // so the lookup allocates the pair. Fine for a batch tool.
        self.follows
            .contains(&(follower.to_string(), followee.to_string()))
    }

    /// Should `post` appear in `user`'s feed?
    ///
    /// True when the user wrote it or follows its author. The equality check
    /// comes first, so a self-follow edge never matches a second time.
    pub fn visible_to(&self, user: &str, post: &Post) -> bool {
        post.author == user || self.follows(user, &post.author)
    }

    /// The posts visible to `user`, in original file order.
    pub fn feed<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a Post> {
        self.posts.iter().filter(move |post| self.visible_to(user, post))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn follow_count(&self) -> usize {
        self.follows.len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
