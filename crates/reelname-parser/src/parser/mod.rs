//! Regex-based path parser.
//!
//! Rules are applied in a fixed order: extension and file name split, year,
//! season/episode marker (which decides the media type), then title
//! extraction and cleanup.

mod episode;
mod metadata;
pub(crate) mod title;

use crate::model::FileSignals;
use reelname_common::MediaType;
use std::path::{Path, PathBuf};

/// Parse a path into [`FileSignals`].
pub fn parse(path: &Path) -> FileSignals {
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let base_filename = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let absolute = absolute_path(path);
    let absolute = absolute.to_string_lossy();

    let year = metadata::extract_year(&absolute);
    let season_episode = episode::extract(&absolute);
    let media_type = if season_episode.is_some() {
        MediaType::Series
    } else {
        MediaType::Movie
    };

    let raw_title = title::extract(&absolute, media_type).unwrap_or(base_filename.as_str());
    let raw_title = title::clean_title(raw_title);

    FileSignals {
        extension,
        raw_title,
        year,
        media_type,
        season_episode,
        directory,
        base_filename,
    }
}

/// Resolve `path` against the current directory without touching the
/// filesystem. Falls back to the path as given.
fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
