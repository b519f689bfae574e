//! chirp-render — plain-text feed renderer.
//!
//! Walks the known users of a [`FeedStore`] in ascending lexicographic
//! order and writes each user's feed to the output sink:
//!
//! ```text
//! Alice
//!     @Bob: Hello
//!     @Alice: Good morning
//! ```
//!
//! (the indent is a single tab). The renderer owns no data and performs no
//! mutation; rendering the same store twice produces byte-identical output.

use std::io::Write;

use chirp_core::{FeedError, FeedStore, Result};

/// Render every known user's feed to `out`.
///
/// One header line per user, then one `\t@AUTHOR: TEXT` line per visible
/// post in original file order. Users with nothing visible still get their
/// header line.
pub fn render_feeds<W: Write>(store: &FeedStore, out: &mut W) -> Result<()> {
    for user in store.users() {
        writeln!(out, "{user}").map_err(render_error)?;
        for post in store.feed(user) {
            writeln!(out, "\t{post}").map_err(render_error)?;
        }
    }
    Ok(())
}

fn render_error(source: std::io::Error) -> FeedError {
    FeedError::Render { source }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
