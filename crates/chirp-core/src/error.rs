//! chirp error types.
//!
//! Every failure is terminal: the loaders stop at the first bad line and the
//! caller prints one diagnostic and exits. Each variant carries enough
//! context (file, 1-based line number) for the user to fix the input.

use std::path::PathBuf;

use thiserror::Error;

/// Load and render errors.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Input file cannot be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    FileUnreadable {
        /// Path as given on the command line.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is missing its required separator.
    #[error("{file}:{line}: no {separator:?} separator")]
    SeparatorNotFound {
        file: String,
        /// 1-based line number.
        line: usize,
        separator: &'static str,
    },

    /// A line starts with its separator, leaving an empty identifier.
    #[error("{file}:{line}: empty identifier before {separator:?}")]
    EmptyIdentifier {
        file: String,
        line: usize,
        separator: &'static str,
    },

    /// Post text is empty after the separator.
    #[error("{file}:{line}: post text is empty")]
    EmptyPost { file: String, line: usize },

    /// Post text exceeds the character ceiling.
    #[error("{file}:{line}: post text is {len} characters, limit is {limit}")]
    PostTooLong {
        file: String,
        line: usize,
        len: usize,
        limit: usize,
    },

    /// Writing the rendered feed failed.
    #[error("failed to write feed output: {source}")]
    Render {
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using FeedError.
pub type Result<T> = std::result::Result<T, FeedError>;
