//! Path utilities for detecting supported video files by extension.
//!
//! The renamer only touches containers it knows how to name; everything else
//! passed on the command line is reported and dropped before processing.

use std::path::Path;

/// Video extensions accepted when no explicit list is configured.
const VIDEO_EXTENSIONS: &[&str] = &["avi", "mkv", "mov", "mp4", "wmv"];

/// Check if a path's extension is in `allowed`.
///
/// Entries in `allowed` may be written with or without the leading dot and
/// are compared case-insensitively.
///
/// ```
/// use std::path::Path;
/// use reelname_common::paths::{has_extension, video_extensions};
///
/// assert!(has_extension(Path::new("/path/to/video.mp4"), video_extensions()));
/// assert!(!has_extension(Path::new("movie.nfo"), video_extensions()));
/// ```
pub fn has_extension<S: AsRef<str>>(path: &Path, allowed: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    allowed
        .iter()
        .any(|a| a.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Get the list of default video file extensions.
///
/// # Examples
///
/// ```
/// use reelname_common::paths::video_extensions;
///
/// let extensions = video_extensions();
/// assert!(extensions.contains(&"mkv"));
/// ```
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}
