//! Input discovery and per-file metadata assembly.
//!
//! This module turns command-line inputs into the sorted list of video files
//! to process, and builds one [`MediaMetadata`] record per file by merging
//! the path signals, a sidecar identifier, and probed media properties.

pub mod identifier;
pub mod prober;

use reelname_av::MediaProperties;
use reelname_common::paths::has_extension;
use reelname_common::{Error, MediaType};
use reelname_parser::{parse_path, FileSignals, SeasonEpisode};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub use identifier::SidecarIdentifierReader;
pub use prober::{FfprobeReader, PropertyReader};

/// Everything known about one file before resolution.
///
/// Built from [`FileSignals`] and then extended by the explicit `merge_*`
/// functions. A merge only fills fields that are still empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMetadata {
    pub extension: String,
    pub raw_title: String,
    pub year: Option<String>,
    pub media_type: MediaType,
    pub season_episode: Option<SeasonEpisode>,
    pub directory: PathBuf,
    pub base_filename: String,
    pub runtime_minutes: Option<u32>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    /// Remote identifier (`tt\d+`), from a sidecar or set during resolution.
    pub remote_id: Option<String>,
}

impl MediaMetadata {
    /// Start a record from path signals.
    pub fn from_signals(signals: FileSignals) -> Self {
        Self {
            extension: signals.extension,
            raw_title: signals.raw_title,
            year: signals.year,
            media_type: signals.media_type,
            season_episode: signals.season_episode,
            directory: signals.directory,
            base_filename: signals.base_filename,
            runtime_minutes: None,
            height: None,
            width: None,
            remote_id: None,
        }
    }

    /// Add a sidecar identifier unless one is already set.
    pub fn merge_remote_id(&mut self, remote_id: Option<String>) {
        if self.remote_id.is_none() {
            self.remote_id = remote_id;
        }
    }

    /// Add probed properties, keeping any values already present.
    pub fn merge_properties(&mut self, properties: MediaProperties) {
        if self.runtime_minutes.is_none() {
            self.runtime_minutes = properties.runtime_minutes;
        }
        if self.height.is_none() {
            self.height = properties.height;
        }
        if self.width.is_none() {
            self.width = properties.width;
        }
    }

    pub fn season(&self) -> Option<&str> {
        self.season_episode.as_ref().map(|se| se.season.as_str())
    }

    pub fn episode(&self) -> Option<&str> {
        self.season_episode.as_ref().map(|se| se.episode.as_str())
    }

    /// Shift the episode number by `offset` and return the new number.
    ///
    /// The stored episode is rewritten zero-padded to width 2. On error the
    /// record is left unchanged.
    pub fn apply_episode_offset(&mut self, offset: i64) -> Result<i64, OffsetError> {
        let se = self.season_episode.as_mut().ok_or(OffsetError::NoEpisode)?;
        let episode = se
            .episode
            .parse::<i64>()
            .map_err(|_| OffsetError::NoEpisode)?;
        let shifted = episode
            .checked_add(offset)
            .ok_or(OffsetError::Overflow { episode, offset })?;
        se.episode = format!("{shifted:02}");
        Ok(shifted)
    }
}

/// Why an episode offset could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OffsetError {
    #[error("no numeric episode number")]
    NoEpisode,

    #[error("episode {episode} shifted by {offset} overflows")]
    Overflow { episode: i64, offset: i64 },
}

/// Assembles [`MediaMetadata`] for a file from its three sources.
pub struct Scanner {
    identifier: SidecarIdentifierReader,
    prober: Box<dyn PropertyReader>,
}

impl Scanner {
    /// Create a scanner that probes with `ffprobe`.
    pub fn new() -> Self {
        Self::with_prober(Box::new(FfprobeReader::new()))
    }

    /// Create a scanner with a custom property reader.
    pub fn with_prober(prober: Box<dyn PropertyReader>) -> Self {
        Self {
            identifier: SidecarIdentifierReader::new(),
            prober,
        }
    }

    /// Build the merged metadata record for `path`.
    ///
    /// Merge order: path signals, then sidecar identifier, then probed
    /// properties.
    pub fn scan_file(&self, path: &Path) -> MediaMetadata {
        debug!("Scanning file: {:?}", path);

        let mut metadata = MediaMetadata::from_signals(parse_path(path));
        metadata.merge_remote_id(self.identifier.read(path));
        metadata.merge_properties(self.prober.read(path));

        debug!(
            title = %metadata.raw_title,
            media_type = %metadata.media_type,
            year = ?metadata.year,
            remote_id = ?metadata.remote_id,
            runtime = ?metadata.runtime_minutes,
            "merged metadata"
        );
        metadata
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of filtering command-line inputs.
#[derive(Debug, Default)]
pub struct InputFiles {
    /// Accepted video files, ordered by their path string.
    pub files: Vec<PathBuf>,
    /// Inputs that were dropped, with the reason.
    pub rejected: Vec<(PathBuf, Error)>,
}

/// Expand and filter inputs into a sorted list of video files.
///
/// Directories are walked (without following symlinks) for files whose
/// extension is in `extensions`. Missing paths and unsupported files given
/// directly are rejected.
pub fn collect_inputs<S: AsRef<str>>(inputs: &[PathBuf], extensions: &[S]) -> InputFiles {
    let mut result = InputFiles::default();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| match e {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!("Failed to read directory entry: {}", e);
                        None
                    }
                })
            {
                let path = entry.path();
                if entry.file_type().is_file() && has_extension(path, extensions) {
                    result.files.push(path.to_path_buf());
                }
            }
        } else if !input.exists() {
            result.rejected.push((
                input.clone(),
                Error::not_found(format!("file {}", input.display())),
            ));
        } else if !has_extension(input, extensions) {
            result.rejected.push((
                input.clone(),
                Error::invalid_input(format!("unsupported file type: {}", input.display())),
            ));
        } else {
            result.files.push(input.clone());
        }
    }

    // String order, not component order: "a.b/c.mkv" sorts before "a/b.mkv"
    result.files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    result.files.dedup();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn movie_metadata() -> MediaMetadata {
        MediaMetadata::from_signals(parse_path("/m/Alien.1979.1080p.BluRay.x264.mkv"))
    }

    #[test]
    fn test_merge_remote_id_only_fills_empty() {
        let mut metadata = movie_metadata();
        metadata.merge_remote_id(Some("tt0078748".into()));
        metadata.merge_remote_id(Some("tt9999999".into()));
        assert_eq!(metadata.remote_id.as_deref(), Some("tt0078748"));

        metadata.merge_remote_id(None);
        assert_eq!(metadata.remote_id.as_deref(), Some("tt0078748"));
    }

    #[test]
    fn test_merge_properties() {
        let mut metadata = movie_metadata();
        metadata.merge_properties(MediaProperties {
            height: Some(1080),
            width: Some(1920),
            runtime_minutes: Some(116),
        });
        assert_eq!(metadata.runtime_minutes, Some(116));
        assert_eq!(metadata.width, Some(1920));

        metadata.merge_properties(MediaProperties::default());
        assert_eq!(metadata.runtime_minutes, Some(116));
    }

    #[test]
    fn test_apply_episode_offset() {
        let mut metadata =
            MediaMetadata::from_signals(parse_path("/tv/futurama_S01E03_somename.mkv"));
        assert_eq!(metadata.apply_episode_offset(-1), Ok(2));
        assert_eq!(metadata.episode(), Some("02"));

        assert_eq!(metadata.apply_episode_offset(10), Ok(12));
        assert_eq!(metadata.episode(), Some("12"));
    }

    #[test]
    fn test_apply_episode_offset_movie() {
        let mut metadata = movie_metadata();
        assert_eq!(
            metadata.apply_episode_offset(1),
            Err(OffsetError::NoEpisode)
        );
    }

    #[test]
    fn test_apply_episode_offset_overflow() {
        let mut metadata = MediaMetadata::from_signals(parse_path("/tv/Show.S01E03.mkv"));
        assert_eq!(
            metadata.apply_episode_offset(i64::MAX),
            Err(OffsetError::Overflow {
                episode: 3,
                offset: i64::MAX
            })
        );
        assert_eq!(metadata.episode(), Some("03"));
    }

    #[test]
    fn test_collect_inputs_sorts_and_filters() {
        let dir = TempDir::new().unwrap();
        let b = dir.path().join("b.mkv");
        let a = dir.path().join("a.mp4");
        let nfo = dir.path().join("a.nfo");
        for p in [&a, &b, &nfo] {
            fs::write(p, b"").unwrap();
        }
        let missing = dir.path().join("missing.mkv");

        let inputs = vec![b.clone(), nfo.clone(), missing.clone(), a.clone()];
        let result = collect_inputs(&inputs, reelname_common::paths::video_extensions());

        assert_eq!(result.files, vec![a, b]);
        assert_eq!(result.rejected.len(), 2);
        assert!(matches!(result.rejected[0].1, Error::InvalidInput(_)));
        assert!(matches!(result.rejected[1].1, Error::NotFound(_)));
    }

    #[test]
    fn test_collect_inputs_walks_directories() {
        let dir = TempDir::new().unwrap();
        let season = dir.path().join("Show").join("Season 1");
        fs::create_dir_all(&season).unwrap();
        fs::write(season.join("Show.S01E02.mkv"), b"").unwrap();
        fs::write(season.join("Show.S01E01.mkv"), b"").unwrap();
        fs::write(season.join("Show.S01E01.srt"), b"").unwrap();

        let result = collect_inputs(&[dir.path().to_path_buf()], &["mkv"]);

        assert!(result.rejected.is_empty());
        assert_eq!(result.files.len(), 2);
        assert!(result.files[0].ends_with("Show.S01E01.mkv"));
        assert!(result.files[1].ends_with("Show.S01E02.mkv"));
    }

    #[test]
    fn test_collect_inputs_sorts_by_path_string() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("a.b")).unwrap();
        let nested = dir.path().join("a").join("b.mkv");
        let dotted = dir.path().join("a.b").join("c.mkv");
        fs::write(&nested, b"").unwrap();
        fs::write(&dotted, b"").unwrap();

        let result = collect_inputs(&[nested.clone(), dotted.clone()], &["mkv"]);

        assert_eq!(result.files, vec![dotted, nested]);
    }
}
