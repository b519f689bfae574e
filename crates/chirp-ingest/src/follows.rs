//! Follow-graph loader.
//!
//! One line per person: `<identifier> follows <a>, <b>, …`. The left
//! identifier and every follower token become known users; each
//! `(identifier, token)` pair becomes a follow edge. A line with nothing
//! after the separator registers the identifier with no edges.

use std::io::BufRead;
use std::path::Path;

use chirp_core::parse::{split_line, SplitError};
use chirp_core::{FeedError, FeedStore, Result};
use tracing::debug;

const SEPARATOR: &str = " follows ";
const LIST_SEPARATOR: &str = ", ";

/// Load the follow-graph file at `path` into `store`.
pub fn load_follows(path: &Path, store: &mut FeedStore) -> Result<()> {
    let reader = crate::open(path)?;
    read_follows(reader, &path.display().to_string(), store)
}

/// Read follow-graph lines from any buffered source. `source` names the
/// input in diagnostics.
pub fn read_follows<R: BufRead>(reader: R, source: &str, store: &mut FeedStore) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|err| FeedError::FileUnreadable {
            path: source.into(),
            source: err,
        })?;
        let line = crate::strip_cr(&line);

        let (user, followees) = match split_line(line, SEPARATOR) {
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

        store.add_user(user);
        for followee in followees.split(LIST_SEPARATOR).filter(|t| !t.is_empty()) {
            store.add_follow(user, followee);
        }
    }

    debug!(
        source,
        users = store.user_count(),
        edges = store.follow_count(),
        "follow graph loaded"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
