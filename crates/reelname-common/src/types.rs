//! Core type definitions shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media a file contains.
///
/// Only movies and episodic series are recognised; anything without a
/// season/episode marker is treated as a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// A feature film or TV movie.
    Movie,
    /// An episode of a TV series.
    Series,
}

impl MediaType {
    /// Returns `true` for [`MediaType::Series`].
    pub fn is_series(self) -> bool {
        matches!(self, Self::Series)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "film" => Ok(Self::Movie),
            "series" | "tv" | "show" => Ok(Self::Series),
            _ => Err(crate::Error::invalid_input(format!(
                "invalid media type: {s}"
            ))),
        }
    }
}
