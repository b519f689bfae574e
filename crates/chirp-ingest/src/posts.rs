//! Post loader.
//!
//! One line per post: `<identifier>> <text>`. The separator is the first
//! `"> "` in the line, so the text itself may contain angle brackets. Text
//! is validated against the configured character ceiling before the post is
//! recorded. Authors are registered as known users even when the follow
//! graph never mentions them, so someone who only posts still gets a feed.

use std::io::BufRead;
use std::path::Path;

use chirp_core::config::PostsConfig;
use chirp_core::parse::{split_line, SplitError};
use chirp_core::{FeedError, FeedStore, Result};
use tracing::debug;

const SEPARATOR: &str = "> ";

/// Load the posts file at `path` into `store`, validating text against
/// `rules`.
pub fn load_posts(path: &Path, rules: &PostsConfig, store: &mut FeedStore) -> Result<()> {
    let reader = crate::open(path)?;
    read_posts(reader, &path.display().to_string(), rules, store)
}

/// Read post lines from any buffered source. `source` names the input in
/// diagnostics.
pub fn read_posts<R: BufRead>(
    reader: R,
    source: &str,
    rules: &PostsConfig,
    store: &mut FeedStore,
) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|err| FeedError::FileUnreadable {
            path: source.into(),
            source: err,
        })?;
        let line = crate::strip_cr(&line);

        let (author, text) = match split_line(line, SEPARATOR) {
            Ok(halves) => halves,
            Err(SplitError::MissingSeparator) => {
                return Err(FeedError::SeparatorNotFound {
                    file: source.to_string(),
                    line: number,
                    separator: SEPARATOR,
                })
            }
            Err(SplitError::EmptyLeft) => {
                return Err(FeedError::EmptyIdentifier {
                    file: source.to_string(),
                    line: number,
                    separator: SEPARATOR,
                })
            }
        };

        let considered_empty =
            text.is_empty() || (rules.reject_blank && text.chars().all(char::is_whitespace));
        if considered_empty {
            return Err(FeedError::EmptyPost {
                file: source.to_string(),
                line: number,
            });
        }

        // Character count, not byte count: 140 accented characters fit.
        let len = text.chars().count();
        if len > rules.max_chars {
            return Err(FeedError::PostTooLong {
                file: source.to_string(),
                line: number,
                len,
                limit: rules.max_chars,
            });
        }

        store.add_post(author, text);
    }

    debug!(source, posts = store.post_count(), "posts loaded");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
