//! # reelname-av
//!
//! Reads technical properties from video files.
//!
//! This crate provides:
//! - Probing a file for its primary video stream dimensions and runtime
//! - Detection of the external tools the probe relies on
//!
//! Probing shells out to the `ffprobe` CLI, which must be on `PATH`.
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use reelname_av::probe_properties;
//!
//! let props = probe_properties("/path/to/video.mkv")?;
//! if let Some(minutes) = props.runtime_minutes {
//!     println!("Runtime: {minutes} min");
//! }
//! # Ok::<(), reelname_av::Error>(())
//! ```

mod error;
pub mod probe;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use probe::MediaProperties;
pub use tools::{check_tool, check_tools, require_tool, ToolInfo};

/// Probe a media file and return its technical properties.
///
/// # Errors
///
/// Returns an error if `ffprobe` is missing, fails, or produces output that
/// cannot be decoded.
pub fn probe_properties<P: AsRef<std::path::Path>>(path: P) -> Result<MediaProperties> {
    probe::probe_with_ffprobe(path.as_ref())
}
