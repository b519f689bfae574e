//! chirp — per-user feed renderer.
//!
//! Reads a follow-graph file and a posts file, builds one [`FeedStore`],
//! and prints every known user's personalized feed.
//!
//! # Architecture
//!
//! ```text
//! chirp-ingest ──► chirp-core::FeedStore ──► chirp-render
//! ```
//!
//! The whole pipeline is sequential: load the follow graph, load the posts,
//! render. The first error aborts before any feed output is produced.

use std::io::Write;
use std::path::Path;

use chirp_core::config::Config;
use chirp_core::{FeedStore, Result};

/// Run the full pipeline: load both files, render every feed to `out`.
///
/// Returns the store so callers (tests, mostly) can inspect what was loaded.
pub fn run<W: Write>(
    users_file: &Path,
    posts_file: &Path,
    config: &Config,
    out: &mut W,
) -> Result<FeedStore> {
    let mut store = FeedStore::new();
    chirp_ingest::load_follows(users_file, &mut store)?;
    chirp_ingest::load_posts(posts_file, &config.posts, &mut store)?;
    chirp_render::render_feeds(&store, out)?;
    Ok(store)
}
