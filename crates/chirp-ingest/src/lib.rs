//! chirp-ingest — input-file loaders for chirp.
//!
//! Each loader streams its file line by line through the shared parser in
//! [`chirp_core::parse`] and registers what it finds in a [`FeedStore`]
//! (`chirp_core::FeedStore`). Loading is all-or-nothing: the first bad line
//! aborts with a diagnostic carrying the file name and 1-based line number,
//! and the store must then be discarded.

pub mod follows;
pub mod posts;

pub use follows::load_follows;
pub use posts::load_posts;

use std::io;
use std::path::Path;

use chirp_core::{FeedError, Result};

/// Open `path` for buffered reading, mapping the failure onto the
/// file-unreadable diagnostic.
fn open(path: &Path) -> Result<io::BufReader<std::fs::File>> {
    std::fs::File::open(path)
        .map(io::BufReader::new)
        .map_err(|source| FeedError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })
}

/// Strip one trailing `'\r'` so CRLF input parses like LF input.
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
