//! Reelname-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across reelname:
//!
//! - **Core Types**: the [`MediaType`] enum shared by the parser and the
//!   resolution engine
//! - **Path Utilities**: Functions to detect supported video files by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use reelname_common::{Error, MediaType, Result};
//! use reelname_common::paths::{has_extension, video_extensions};
//! use std::path::Path;
//!
//! let media_type: MediaType = "series".parse().unwrap();
//! assert_eq!(media_type, MediaType::Series);
//!
//! assert!(has_extension(Path::new("movie.mkv"), video_extensions()));
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("title"))
//! }
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
