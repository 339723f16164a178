//! Season/episode marker detection.
//!
//! A path is a series episode when it contains `S<1-2 digits>` immediately
//! followed by `E<1-2 digits>`, in either case.

use crate::model::SeasonEpisode;
use regex::Regex;
use std::sync::LazyLock;

// Greedy prefix: the marker closest to the end of the path wins, so the file
// name takes precedence over a marker in a parent directory.
static RE_SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^.*s(\d{1,2})e(\d{1,2})").unwrap());

/// Extract the zero-padded season/episode marker from `path`.
pub fn extract(path: &str) -> Option<SeasonEpisode> {
    let caps = RE_SEASON_EPISODE.captures(path)?;
    Some(SeasonEpisode::new(&caps[1], &caps[2]))
}
