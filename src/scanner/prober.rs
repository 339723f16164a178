//! Media property reading for the scanner.
//!
//! Wraps the reelname-av probe so a failed probe degrades to empty
//! properties instead of an error.

use reelname_av::MediaProperties;
use std::path::Path;
use tracing::debug;

/// Reads technical properties of a media file.
pub trait PropertyReader: Send + Sync {
    /// Return whatever properties could be read. Never fails.
    fn read(&self, path: &Path) -> MediaProperties;
}

/// Property reader backed by `ffprobe`.
#[derive(Debug, Default)]
pub struct FfprobeReader;

impl FfprobeReader {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyReader for FfprobeReader {
    fn read(&self, path: &Path) -> MediaProperties {
        match reelname_av::probe_properties(path) {
            Ok(props) => props,
            Err(e) => {
                debug!("Failed to probe {:?}: {}", path, e);
                MediaProperties::default()
            }
        }
    }
}
