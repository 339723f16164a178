//! # reelname-parser
//!
//! Extracts structural signals from a media file path: a cleaned title
//! guess, a release year, season/episode markers, and the container
//! extension.
//!
//! Parsing never fails. A missing signal is represented as `None` and the
//! title always falls back to the bare filename.
//!
//! ## Quick Start
//!
//! ```
//! use reelname_parser::{parse_path, MediaType};
//!
//! let signals = parse_path("/m/Alien.1979.1080p.BluRay.x264.mkv");
//!
//! assert_eq!(signals.raw_title, "Alien");
//! assert_eq!(signals.year.as_deref(), Some("1979"));
//! assert_eq!(signals.media_type, MediaType::Movie);
//! assert_eq!(signals.extension, ".mkv");
//! ```
//!
//! ```
//! use reelname_parser::{parse_path, MediaType};
//!
//! let signals = parse_path("/tv/futurama_s1e3_somename.mkv");
//! assert_eq!(signals.media_type, MediaType::Series);
//! assert_eq!(signals.season(), Some("01"));
//! assert_eq!(signals.episode(), Some("03"));
//! ```

pub mod model;
mod parser;

pub use model::{FileSignals, SeasonEpisode};
pub use parser::title::clean_title;
pub use reelname_common::MediaType;

use std::path::Path;

/// Parse a file path into [`FileSignals`].
///
/// Relative paths are resolved against the current directory before the
/// year, season/episode, and title rules run, so directory names can
/// contribute signals. The `directory` field keeps the path as given.
pub fn parse_path<P: AsRef<Path>>(path: P) -> FileSignals {
    parser::parse(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie() {
        let signals = parse_path("/m/Alien.1979.1080p.BluRay.x264.mkv");
        assert_eq!(signals.raw_title, "Alien");
        assert_eq!(signals.year.as_deref(), Some("1979"));
        assert_eq!(signals.media_type, MediaType::Movie);
        assert!(signals.season_episode.is_none());
        assert_eq!(signals.base_filename, "Alien.1979.1080p.BluRay.x264");
        assert_eq!(signals.directory, Path::new("/m"));
    }

    #[test]
    fn test_parse_tv_episode() {
        let signals = parse_path("/tv/Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND.mkv");
        assert_eq!(signals.raw_title, "Breaking Bad");
        assert_eq!(signals.media_type, MediaType::Series);
        assert_eq!(signals.season(), Some("01"));
        assert_eq!(signals.episode(), Some("01"));
    }

    #[test]
    fn test_parse_without_quality_markers_falls_back_to_filename() {
        let signals = parse_path("/tv/Show.S01E02.mkv");
        assert_eq!(signals.raw_title, "Show");
        assert_eq!(signals.season(), Some("01"));
        assert_eq!(signals.episode(), Some("02"));
    }

    #[test]
    fn test_parse_container_extension_keeps_dot() {
        let signals = parse_path("/m/Movie (2020).mp4");
        assert_eq!(signals.extension, ".mp4");
        assert_eq!(signals.raw_title, "Movie");
        assert_eq!(signals.year.as_deref(), Some("2020"));
    }
}
