//! Detection of the external programs probing depends on.

use crate::{Error, Result};
use std::path::PathBuf;
use std::process::Command;

/// Tools `probe_properties` shells out to.
const PROBE_TOOLS: &[&str] = &["ffprobe"];

/// Availability report for one program.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub available: bool,
    /// First line of `-version` output.
    pub version: Option<String>,
    pub path: Option<PathBuf>,
}

/// Locate `name` on `PATH` and ask it for its version.
///
/// A program that is found but exits unsuccessfully on `-version` is
/// reported as unavailable.
///
/// ```no_run
/// let info = reelname_av::check_tool("ffprobe");
/// println!("{} available: {}", info.name, info.available);
/// ```
pub fn check_tool(name: &str) -> ToolInfo {
    let path = which::which(name).ok();
    let version = path
        .as_ref()
        .and_then(|p| Command::new(p).arg("-version").output().ok())
        .filter(|out| out.status.success())
        .and_then(|out| {
            String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .map(str::to_string)
        });

    ToolInfo {
        name: name.to_string(),
        available: version.is_some(),
        path: path.filter(|_| version.is_some()),
        version,
    }
}

/// Report on every tool probing needs.
pub fn check_tools() -> Vec<ToolInfo> {
    PROBE_TOOLS.iter().map(|name| check_tool(name)).collect()
}

/// Resolve `name` on `PATH` or fail with [`Error::ToolNotFound`].
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "reelname_missing_tool_12345";

    #[test]
    fn test_missing_tool_is_unavailable() {
        let info = check_tool(MISSING);
        assert_eq!(info.name, MISSING);
        assert!(!info.available);
        assert!(info.version.is_none());
        assert!(info.path.is_none());
    }

    #[test]
    fn test_require_missing_tool() {
        let err = require_tool(MISSING).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[test]
    fn test_check_tools_covers_probe_tools() {
        let names: Vec<_> = check_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, PROBE_TOOLS);
    }
}
