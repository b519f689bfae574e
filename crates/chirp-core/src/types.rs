//! Core types for chirp-core.
//!
//! This module defines the one record that flows through the whole pipeline:
//! the [`Post`]. Identifiers are plain `String`s compared byte-for-byte, so
//! `alice` and `Alice` are two different people.

/// A single posted message, in the order it appeared in the posts file.
///
/// The loader validates the text before constructing a `Post`, so every
/// stored post has non-empty text within the configured character ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Identifier of the person who wrote the post.
    pub author: String,
    /// The post text, everything after the `"> "` separator.
    pub text: String,
}

impl Post {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}: {}", self.author, self.text)
    }
}
