//! Remote identifier lookup from sidecar `.nfo` files.
//!
//! A descriptor file next to the media file whose name contains the media's
//! base filename may carry an IMDb link. The first `tt\d+` id found wins.

use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static RE_IMDB_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:www\.)?imdb\.com/title/(tt\d+)").unwrap()
});

/// Reads a remote identifier from an adjacent `.nfo` file.
#[derive(Debug, Default)]
pub struct SidecarIdentifierReader;

impl SidecarIdentifierReader {
    pub fn new() -> Self {
        Self
    }

    /// Return the identifier for `path`, or `None` when no readable sidecar
    /// carries one.
    pub fn read(&self, path: &Path) -> Option<String> {
        let sidecar = find_sidecar(path)?;
        let content = match fs::read(&sidecar) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                debug!("Failed to read sidecar {:?}: {}", sidecar, e);
                return None;
            }
        };

        let id = extract_remote_id(&content);
        debug!(sidecar = ?sidecar, remote_id = ?id, "sidecar parsed");
        id
    }
}

/// Find the first `.nfo` in the media file's directory whose name contains
/// the base filename (case-insensitive). Entries are checked in name order.
fn find_sidecar(path: &Path) -> Option<std::path::PathBuf> {
    let base = path.file_stem()?.to_str()?;
    let directory = std::path::absolute(path)
        .ok()?
        .parent()
        .map(Path::to_path_buf)?;

    let pattern = RegexBuilder::new(&format!(r"^.*{}.*\.nfo$", regex::escape(base)))
        .case_insensitive(true)
        .build()
        .ok()?;

    let entries = match fs::read_dir(&directory) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Failed to list {:?}: {}", directory, e);
            return None;
        }
    };

    let mut names: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    names.sort();

    names
        .into_iter()
        .find(|name| pattern.is_match(name))
        .map(|name| directory.join(name))
}

/// First IMDb title id linked in `content`.
fn extract_remote_id(content: &str) -> Option<String> {
    RE_IMDB_LINK
        .captures(content)
        .map(|caps| caps[1].to_string())
}
