//! Year extraction.

use regex::Regex;
use std::sync::LazyLock;

static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"19\d\d|20\d\d").unwrap());

/// Return the first `19xx`/`20xx` digit run in `path`.
///
/// No validation is done against impossible years; `2099` is accepted.
pub fn extract_year(path: &str) -> Option<String> {
    RE_YEAR.find(path).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_year_wins() {
        assert_eq!(
            extract_year("/movies/2001/Alien 1979.mkv").as_deref(),
            Some("2001")
        );
    }

    #[test]
    fn test_year_in_filename() {
        assert_eq!(
            extract_year("/m/Alien.1979.1080p.mkv").as_deref(),
            Some("1979")
        );
    }

    #[test]
    fn test_no_year() {
        assert_eq!(extract_year("/tv/Show.S01E01.mkv"), None);
        assert_eq!(extract_year("/tv/Show 1899.mkv"), None);
    }
}
