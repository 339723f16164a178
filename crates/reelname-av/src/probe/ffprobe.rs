//! FFprobe-based media probing.

use super::types::*;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    format: Option<FfprobeFormat>,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: String,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    avg_frame_rate: Option<String>,
    nb_frames: Option<String>,
    duration: Option<String>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Probe a media file using ffprobe.
pub fn probe_with_ffprobe(path: &Path) -> Result<MediaProperties> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("ffprobe")
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffprobe", stderr.to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

    let ff_output: FfprobeOutput = serde_json::from_str(&json_str)?;

    let props = parse_ffprobe_output(ff_output);

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), ?props, "ffprobe properties");

    Ok(props)
}

fn parse_ffprobe_output(output: FfprobeOutput) -> MediaProperties {
    let Some(video) = output.streams.iter().find(|s| s.codec_type == "video") else {
        return MediaProperties::default();
    };

    let fps = video
        .r_frame_rate
        .as_deref()
        .and_then(parse_frame_rate)
        .or_else(|| video.avg_frame_rate.as_deref().and_then(parse_frame_rate));

    let frames = video
        .nb_frames
        .as_deref()
        .or_else(|| frame_count_tag(&video.tags))
        .and_then(|s| s.parse::<f64>().ok());

    let runtime = match (frames, fps) {
        (Some(frames), Some(fps)) => runtime_minutes(frames, fps),
        _ => None,
    }
    .or_else(|| {
        // Matroska streams rarely carry a frame count; use the duration.
        let seconds = video
            .duration
            .as_deref()
            .or_else(|| output.format.as_ref().and_then(|f| f.duration.as_deref()))
            .and_then(|s| s.parse::<f64>().ok())?;
        runtime_minutes(seconds, 1.0)
    });

    MediaProperties {
        height: video.height.filter(|h| *h > 0),
        width: video.width.filter(|w| *w > 0),
        runtime_minutes: runtime,
    }
}

/// Matroska muxers write the frame count as a (possibly language-suffixed)
/// `NUMBER_OF_FRAMES` tag.
fn frame_count_tag(tags: &HashMap<String, String>) -> Option<&str> {
    tags.iter()
        .find(|(key, _)| key.to_ascii_uppercase().starts_with("NUMBER_OF_FRAMES"))
        .map(|(_, value)| value.as_str())
}

fn parse_frame_rate(rate_str: &str) -> Option<f64> {
    let parts: Vec<&str> = rate_str.split('/').collect();
    if parts.len() == 2 {
        let num: f64 = parts[0].parse().ok()?;
        let den: f64 = parts[1].parse().ok()?;
        if den != 0.0 {
            return Some(num / den);
        }
        return None;
    }
    rate_str.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MediaProperties {
        parse_ffprobe_output(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_parse_frame_rate() {
        assert_eq!(parse_frame_rate("24000/1001"), Some(23.976023976023978));
        assert_eq!(parse_frame_rate("30/1"), Some(30.0));
        assert_eq!(parse_frame_rate("25"), Some(25.0));
        assert_eq!(parse_frame_rate("0/0"), None);
        assert_eq!(parse_frame_rate("invalid"), None);
    }

    #[test]
    fn test_runtime_from_frame_count() {
        let props = parse(
            r#"{
                "format": {"duration": "6961.000"},
                "streams": [
                    {"codec_type": "audio"},
                    {"codec_type": "video", "width": 1920, "height": 800,
                     "r_frame_rate": "24000/1001", "nb_frames": "166889"}
                ]
            }"#,
        );
        assert_eq!(props.width, Some(1920));
        assert_eq!(props.height, Some(800));
        assert_eq!(props.runtime_minutes, Some(116));
    }

    #[test]
    fn test_runtime_from_matroska_tag() {
        let props = parse(
            r#"{
                "streams": [
                    {"codec_type": "video", "width": 1280, "height": 720,
                     "r_frame_rate": "25/1",
                     "tags": {"NUMBER_OF_FRAMES-eng": "67500"}}
                ]
            }"#,
        );
        // 2700 s = 45 min
        assert_eq!(props.runtime_minutes, Some(45));
    }

    #[test]
    fn test_runtime_falls_back_to_duration() {
        let props = parse(
            r#"{
                "format": {"duration": "1320.5"},
                "streams": [{"codec_type": "video", "width": 640, "height": 360}]
            }"#,
        );
        assert_eq!(props.runtime_minutes, Some(22));
    }

    #[test]
    fn test_no_video_stream_is_empty() {
        let props = parse(r#"{"streams": [{"codec_type": "audio"}]}"#);
        assert!(props.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = probe_with_ffprobe(Path::new("/nonexistent/file.mkv")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
