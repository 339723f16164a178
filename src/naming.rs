//! Destination filename synthesis.
//!
//! Movies become `"{title} ({year}){ext}"` and episodes
//! `"{title} - S{season}E{episode} - {episode title}{ext}"`. The composed
//! name is then sanitized for common filesystems.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::metadata::ResolvedTitle;
use crate::scanner::MediaMetadata;

/// Replacement for `:`, which most filesystems reject (MODIFIER LETTER COLON).
pub const COLON_SUBSTITUTE: char = '\u{A789}';

static RE_FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[*?<>"|\\/]"#).unwrap());

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Builds destination paths from resolved metadata.
#[derive(Debug, Default)]
pub struct NameSynthesizer;

impl NameSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Full destination path in the file's own directory.
    ///
    /// Returns `None` for a series when `resolved` has no record for the
    /// metadata's episode number.
    pub fn destination(
        &self,
        metadata: &MediaMetadata,
        resolved: &ResolvedTitle,
    ) -> Option<PathBuf> {
        let name = match (metadata.media_type.is_series(), &metadata.season_episode) {
            (true, Some(se)) => {
                let number = se.episode.parse::<usize>().ok()?;
                let record = resolved.episode(number)?;
                episode_name(
                    &resolved.title,
                    &se.season,
                    &se.episode,
                    &record.episode_title,
                    &metadata.extension,
                )
            }
            (true, None) => return None,
            (false, _) => movie_name(&resolved.title, &resolved.year, &metadata.extension),
        };

        Some(metadata.directory.join(sanitize(&name)))
    }
}

/// `"{title} ({year}){extension}"`, unsanitized.
pub fn movie_name(title: &str, year: &str, extension: &str) -> String {
    format!("{title} ({year}){extension}")
}

/// `"{title} - S{season}E{episode} - {episode_title}{extension}"`, unsanitized.
pub fn episode_name(
    title: &str,
    season: &str,
    episode: &str,
    episode_title: &str,
    extension: &str,
) -> String {
    format!("{title} - S{season}E{episode} - {episode_title}{extension}")
}

/// Remove `* ? < > " | \ /`, replace `:` with [`COLON_SUBSTITUTE`], and
/// collapse runs of spaces.
///
/// ```
/// use reelname::naming::sanitize;
///
/// assert_eq!(sanitize("Star Wars: Episode IV"), "Star Wars\u{A789} Episode IV");
/// assert_eq!(sanitize("What?  Now/Then"), "What NowThen");
/// ```
pub fn sanitize(name: &str) -> String {
    let cleaned = RE_FORBIDDEN.replace_all(name, "");
    let cleaned = cleaned.replace(':', &COLON_SUBSTITUTE.to_string());
    RE_MULTI_SPACE.replace_all(&cleaned, " ").into_owned()
}
