//! Media property types.

use serde::{Deserialize, Serialize};

/// Technical properties of a video file.
///
/// Every field is optional: containers without decodable stream info yield
/// an empty value rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaProperties {
    /// Frame height in pixels.
    pub height: Option<u32>,
    /// Frame width in pixels.
    pub width: Option<u32>,
    /// Runtime rounded to whole minutes.
    pub runtime_minutes: Option<u32>,
}

impl MediaProperties {
    /// Returns `true` if no property could be read.
    pub fn is_empty(&self) -> bool {
        self.height.is_none() && self.width.is_none() && self.runtime_minutes.is_none()
    }
}

/// Runtime in minutes from a frame count and frame rate.
///
/// Seconds and minutes are each rounded half-to-even.
///
/// ```
/// use reelname_av::probe::runtime_minutes;
///
/// // 116 minutes of 23.976 fps video
/// assert_eq!(runtime_minutes(166_889.0, 24000.0 / 1001.0), Some(116));
/// assert_eq!(runtime_minutes(1000.0, 0.0), None);
/// ```
pub fn runtime_minutes(frames: f64, fps: f64) -> Option<u32> {
    if frames <= 0.0 || fps <= 0.0 || !frames.is_finite() || !fps.is_finite() {
        return None;
    }
    let seconds = (frames / fps).round_ties_even();
    Some((seconds / 60.0).round_ties_even() as u32)
}
