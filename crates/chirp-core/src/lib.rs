//! chirp-core — core library for chirp.
//!
//! This crate holds everything the loaders and the renderer share: the
//! [`Post`] record, the [`FeedStore`] dataset, the line parser, the error
//! taxonomy, and the application config.
//!
//! # Architecture
//!
//! ```text
//! Loaders ──► FeedStore ──► Renderer
//! ```
//!
//! The loaders (chirp-ingest) build one [`FeedStore`] in a single pass over
//! the two input files; the renderer (chirp-render) reads it immutably. The
//! store value is threaded explicitly through the pipeline — there is no
//! shared module-level state.

pub mod config;
pub mod error;
pub mod parse;
pub mod store;
pub mod types;

pub use error::{FeedError, Result};
pub use store::FeedStore;
pub use types::Post;
