//! Parsed path signal types.

use reelname_common::MediaType;
use std::path::PathBuf;

/// Season and episode numbers as zero-padded strings (`"01"`, `"12"`).
///
/// Kept as strings because they are substituted verbatim into the
/// destination filename.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonEpisode {
    /// Season number, left-padded to width 2.
    pub season: String,
    /// Episode number, left-padded to width 2.
    pub episode: String,
}

impl SeasonEpisode {
    /// Build a marker from raw digit strings, padding both to width 2.
    pub fn new(season: &str, episode: &str) -> Self {
        Self {
            season: zero_pad(season),
            episode: zero_pad(episode),
        }
    }
}

/// Structural metadata extracted from a file path.
///
/// `season_episode` is `Some` exactly when `media_type` is
/// [`MediaType::Series`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSignals {
    /// File extension including the leading dot, or empty.
    pub extension: String,
    /// Cleaned title guess used for remote searches.
    pub raw_title: String,
    /// First `19xx`/`20xx` digit run found in the absolute path.
    pub year: Option<String>,
    /// Movie unless a season/episode marker was found.
    pub media_type: MediaType,
    /// Season/episode marker for series.
    pub season_episode: Option<SeasonEpisode>,
    /// Directory of the file as given on input.
    pub directory: PathBuf,
    /// File name without directory and extension.
    pub base_filename: String,
}

impl FileSignals {
    /// Zero-padded season, for series.
    pub fn season(&self) -> Option<&str> {
        self.season_episode.as_ref().map(|se| se.season.as_str())
    }

    /// Zero-padded episode, for series.
    pub fn episode(&self) -> Option<&str> {
        self.season_episode.as_ref().map(|se| se.episode.as_str())
    }
}

/// Left-pad a digit string with zeros to width 2.
pub(crate) fn zero_pad(digits: &str) -> String {
    format!("{digits:0>2}")
}
