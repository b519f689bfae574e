//! Domain-specific assertion helpers for chirp harnesses.
//!
//! These wrap the store's query API with failure messages that name the
//! violated expectation, so a failing harness reads like a sentence.

use chirp_core::FeedStore;

/// Assert that `user` is a known identifier.
pub fn assert_knows(store: &FeedStore, user: &str) {
    assert!(
        store.users().any(|u| u == user),
        "expected {user:?} to be a known user.\n  Known: {:?}",
        store.users().collect::<Vec<_>>()
    );
}

/// Assert that the `(follower, followee)` edge exists.
pub fn assert_edge(store: &FeedStore, follower: &str, followee: &str) {
    assert!(
        store.follows(follower, followee),
        "expected edge {follower:?} -> {followee:?} to exist"
    );
}

/// Assert that `user`'s feed is exactly `expected` (post texts, in order).
pub fn assert_feed(store: &FeedStore, user: &str, expected: &[&str]) {
    let actual: Vec<&str> = store.feed(user).map(|p| p.text.as_str()).collect();
    pretty_assertions::assert_eq!(actual, expected, "feed for {user:?} differs");
}

/// Render the whole store to a string.
pub fn render_to_string(store: &FeedStore) -> String {
    let mut buf = Vec::new();
    chirp_render::render_feeds(store, &mut buf).expect("rendering to a Vec cannot fail");
    String::from_utf8(buf).expect("rendered feed is UTF-8")
}
