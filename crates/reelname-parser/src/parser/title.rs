//! Title extraction and cleanup.
//!
//! Extraction looks for the text between the last path separator and the
//! season/episode marker (series) or release year (movies), provided a
//! resolution or codec marker follows. Cleanup then strips release noise
//! from whatever text was selected.

use reelname_common::MediaType;
use regex::Regex;
use std::sync::LazyLock;

static RE_SERIES_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.*[/\\])(.*)([sS]\d{1,2}[eE]\d{1,2})(.*)(720|1080|2160|x26[45])(.*)").unwrap()
});

static RE_MOVIE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.*[/\\])(.*)(19|20)(\d\d)(.*)(720|1080|2160|x26[45])(.*)").unwrap()
});

static RE_BRACKETED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(\[]\d{4}[)\]]").unwrap());
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[._\-()\[\]]").unwrap());
static RE_DIRECTORS_CUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)director['`’]?s cut").unwrap());
static RE_RELEASE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)bluray|dubbed|repack").unwrap());
static RE_RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:720|1080|2160)p?").unwrap());
static RE_CODEC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)x26[45]").unwrap());
static RE_TRAILING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s\d{1,2}e\d{1,2}.*").unwrap());
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Select the raw title text from an absolute path.
///
/// Returns `None` when the path has no resolution/codec marker after the
/// season/episode marker or year; callers fall back to the file name.
pub fn extract(path: &str, media_type: MediaType) -> Option<&str> {
    let re = match media_type {
        MediaType::Series => &*RE_SERIES_TITLE,
        MediaType::Movie => &*RE_MOVIE_TITLE,
    };
    re.captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip release noise from a title.
///
/// Removing a token can join its neighbours into a new one (`7720p20`), so
/// the rules are reapplied until the text stops changing. Applying the
/// cleanup to an already cleaned title returns it unchanged.
///
/// # Examples
///
/// ```
/// use reelname_parser::clean_title;
///
/// assert_eq!(clean_title("Blade.Runner.Directors.Cut.1080p"), "Blade Runner");
/// assert_eq!(clean_title("Alien [1979] BluRay x264"), "Alien");
/// assert_eq!(clean_title("futurama_s1e3_somename"), "futurama");
/// ```
pub fn clean_title(title: &str) -> String {
    let mut current = clean_pass(title);
    loop {
        // After the first pass no separators remain, so every further
        // change shortens the text.
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(title: &str) -> String {
    let title = RE_BRACKETED_YEAR.replace_all(title, "");
    let title = RE_SEPARATORS.replace_all(&title, " ");
    let title = RE_DIRECTORS_CUT.replace_all(&title, "");
    let title = RE_RELEASE_WORDS.replace_all(&title, "");
    let title = RE_RESOLUTION.replace_all(&title, "");
    let title = RE_CODEC.replace_all(&title, "");
    let title = RE_TRAILING_MARKER.replace_all(&title, "");
    let title = RE_SPACES.replace_all(&title, " ");
    title.trim().to_string()
}
