//! Line parser shared by both loaders.
//!
//! Both input formats are "identifier, separator literal, payload" lines;
//! [`split_line`] is the one place that shape is enforced. The loaders map
//! [`SplitError`] onto [`FeedError`](crate::FeedError) with file and line
//! context attached.

/// Why a line failed to split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The separator does not occur in the line.
    MissingSeparator,
    /// The separator occurs at index 0, so the identifier field is empty.
    EmptyLeft,
}

/// Split `line` at the first occurrence of `separator`.
///
/// Returns the borrowed halves on either side of the separator. The left
/// half must be non-empty; the right half may be empty (a follow line with
/// no followers is valid).
///
/// ```
/// use chirp_core::parse::{split_line, SplitError};
///
/// assert_eq!(split_line("Alice follows Bob", " follows "), Ok(("Alice", "Bob")));
/// assert_eq!(split_line("Alice", " follows "), Err(SplitError::MissingSeparator));
/// assert_eq!(split_line(" follows Bob", " follows "), Err(SplitError::EmptyLeft));
/// ```
pub fn split_line<'a>(line: &'a str, separator: &str) -> Result<(&'a str, &'a str), SplitError> {
    match line.find(separator) {
        None => Err(SplitError::MissingSeparator),
        Some(0) => Err(SplitError::EmptyLeft),
        Some(at) => Ok((&line[..at], &line[at + separator.len()..])),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
