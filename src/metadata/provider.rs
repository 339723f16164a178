//! Trait definition and types for the remote title database.
//!
//! This module defines the [`LookupClient`] trait that the resolution engine
//! talks to, along with the data types returned by lookups. The engine never
//! sees HTTP; it only consumes these plain values.

use std::collections::BTreeSet;

use async_trait::async_trait;
use reelname_common::MediaType;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// A single entry in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Remote identifier (`tt\d+`).
    pub remote_id: String,
    /// Display title.
    pub title: String,
    /// Free-text context, usually starting with the release year.
    pub description: String,
}

impl SearchCandidate {
    pub fn new(
        remote_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            remote_id: remote_id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved titles
// ---------------------------------------------------------------------------

/// One episode of a season, in broadcast order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub episode_title: String,
}

/// Canonical metadata for a movie or series.
///
/// `episodes` is empty for movies and for a freshly fetched series title;
/// it is filled by combining with a season's episode list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTitle {
    pub remote_id: String,
    pub title: String,
    pub year: String,
    pub genres: BTreeSet<String>,
    pub episodes: Vec<EpisodeRecord>,
}

impl ResolvedTitle {
    /// Return a new title carrying `episodes` in place of the current list.
    #[must_use]
    pub fn with_episodes(&self, episodes: Vec<EpisodeRecord>) -> Self {
        Self {
            remote_id: self.remote_id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            genres: self.genres.clone(),
            episodes,
        }
    }

    /// Look up an episode by its 1-based number.
    pub fn episode(&self, number: usize) -> Option<&EpisodeRecord> {
        number.checked_sub(1).and_then(|i| self.episodes.get(i))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure talking to the title database. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-empty error message.
    #[error("remote error: {0}")]
    Remote(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No API key was configured.
    #[error("no API key configured")]
    MissingApiKey,

    /// The configured base URL cannot carry request paths.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

// ---------------------------------------------------------------------------
// Client trait
// ---------------------------------------------------------------------------

/// Async façade over the remote title database.
///
/// Implementations are shared behind an `Arc` by the resolution engine.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Structured search by title, optional release year, and optional
    /// runtime in minutes.
    async fn search_title_advanced(
        &self,
        media_type: MediaType,
        title: &str,
        year: Option<&str>,
        runtime_minutes: Option<u32>,
    ) -> Result<Vec<SearchCandidate>, LookupError>;

    /// Free-text title search.
    async fn search_title_basic(
        &self,
        media_type: MediaType,
        title: &str,
    ) -> Result<Vec<SearchCandidate>, LookupError>;

    /// Fetch the canonical title. The result carries no episodes.
    async fn fetch_title(&self, remote_id: &str) -> Result<ResolvedTitle, LookupError>;

    /// Fetch the ordered episode list of one season.
    ///
    /// Leading zeros in `season` are stripped before transmission.
    async fn fetch_episodes(
        &self,
        remote_id: &str,
        season: &str,
    ) -> Result<Vec<EpisodeRecord>, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedTitle {
        ResolvedTitle {
            remote_id: "tt0903747".into(),
            title: "Breaking Bad".into(),
            year: "2008".into(),
            genres: ["Crime".to_string(), "Drama".to_string()].into(),
            episodes: vec![EpisodeRecord {
                episode_title: "Pilot".into(),
            }],
        }
    }

    #[test]
    fn test_with_episodes_keeps_title_fields() {
        let original = sample();
        let merged = original.with_episodes(vec![
            EpisodeRecord {
                episode_title: "Seven Thirty-Seven".into(),
            },
            EpisodeRecord {
                episode_title: "Grilled".into(),
            },
        ]);

        assert_eq!(merged.title, "Breaking Bad");
        assert_eq!(merged.genres, original.genres);
        assert_eq!(merged.episodes.len(), 2);
        assert_eq!(original.episodes.len(), 1);
    }

    #[test]
    fn test_episode_is_one_based() {
        let title = sample();
        assert!(title.episode(0).is_none());
        assert_eq!(title.episode(1).unwrap().episode_title, "Pilot");
        assert!(title.episode(2).is_none());
    }
}
