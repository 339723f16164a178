//! Resolution of per-file metadata to a canonical title.
//!
//! [`ResolutionEngine::resolve`] runs a priority chain that is re-evaluated
//! after any step records a remote identifier:
//!
//! 1. **batch**: the previous file had the same title, so its result is
//!    reused (series only; a new season fetches just the episode list)
//! 2. **identifier**: a remote id is known, so the title (and for series the
//!    season's episodes) is fetched
//! 3. **advanced search**: structured query by title, year and runtime
//! 4. **basic search**: free-text title query
//!
//! A search that selects a candidate stores its id on the metadata and loops
//! back to step 2.

use std::sync::Arc;

use tracing::debug;

use crate::metadata::provider::{LookupClient, LookupError, ResolvedTitle};
use crate::metadata::selector::CandidateSelector;
use crate::scanner::MediaMetadata;

/// State carried from one file to the next in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchState {
    /// Raw title of the previously resolved file.
    pub previous_title: Option<String>,
    /// Season of the previously resolved file, for series.
    pub previous_season: Option<String>,
    pub previous_resolved: Option<ResolvedTitle>,
}

impl BatchState {
    /// Cached result if `metadata` continues the previous file's title.
    fn reusable_for(&self, metadata: &MediaMetadata) -> Option<&ResolvedTitle> {
        if self.previous_title.as_deref() == Some(metadata.raw_title.as_str()) {
            self.previous_resolved.as_ref()
        } else {
            None
        }
    }
}

/// Which search modes may be used. The two flags are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchModes {
    pub advanced: bool,
    pub basic: bool,
}

impl Default for SearchModes {
    fn default() -> Self {
        Self {
            advanced: true,
            basic: true,
        }
    }
}

/// Resolution failure.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No candidate could be selected. Affects only the current file.
    #[error("nothing found for title \"{title}\"")]
    NotFound { title: String },

    /// The title database could not be queried. Aborts the run.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ResolveError {
    fn not_found(metadata: &MediaMetadata) -> Self {
        Self::NotFound {
            title: metadata.raw_title.clone(),
        }
    }
}

/// Resolves [`MediaMetadata`] through a [`LookupClient`].
pub struct ResolutionEngine {
    client: Arc<dyn LookupClient>,
    selector: CandidateSelector,
}

impl ResolutionEngine {
    pub fn new(client: Arc<dyn LookupClient>, selector: CandidateSelector) -> Self {
        Self { client, selector }
    }

    /// Resolve `metadata`, consuming the previous batch state and returning
    /// the state for the next file.
    ///
    /// Sets `metadata.remote_id` when a search selects a candidate.
    pub async fn resolve(
        &mut self,
        metadata: &mut MediaMetadata,
        state: BatchState,
        modes: SearchModes,
    ) -> Result<(ResolvedTitle, BatchState), ResolveError> {
        let resolved = self.resolve_title(metadata, &state, modes).await?;

        let next = BatchState {
            previous_title: Some(metadata.raw_title.clone()),
            previous_season: metadata.season().map(str::to_string),
            previous_resolved: Some(resolved.clone()),
        };
        Ok((resolved, next))
    }

    async fn resolve_title(
        &mut self,
        metadata: &mut MediaMetadata,
        state: &BatchState,
        modes: SearchModes,
    ) -> Result<ResolvedTitle, ResolveError> {
        let mut advanced = modes.advanced;
        let basic = modes.basic;

        loop {
            if let (Some(previous), true) =
                (state.reusable_for(metadata), metadata.media_type.is_series())
            {
                debug!(title = %metadata.raw_title, "entering batch mode");
                let season = metadata.season().unwrap_or_default();
                if state.previous_season.as_deref() == Some(season) {
                    return Ok(previous.clone());
                }
                let episodes = self
                    .client
                    .fetch_episodes(&previous.remote_id, season)
                    .await?;
                return Ok(previous.with_episodes(episodes));
            }

            if let Some(remote_id) = metadata.remote_id.as_deref() {
                debug!(remote_id, "entering title mode");
                let title = self.client.fetch_title(remote_id).await?;
                return match (metadata.media_type.is_series(), metadata.season()) {
                    (true, Some(season)) => {
                        let episodes = self.client.fetch_episodes(remote_id, season).await?;
                        Ok(title.with_episodes(episodes))
                    }
                    _ => Ok(title),
                };
            }

            if advanced {
                debug!(title = %metadata.raw_title, "entering advanced search mode");
                let runtime = if metadata.media_type.is_series() {
                    None
                } else {
                    metadata.runtime_minutes
                };
                let candidates = self
                    .client
                    .search_title_advanced(
                        metadata.media_type,
                        &metadata.raw_title,
                        metadata.year.as_deref(),
                        runtime,
                    )
                    .await?;

                match self.selector.select(&candidates, None) {
                    Some(index) => {
                        metadata.remote_id = Some(candidates[index].remote_id.clone());
                    }
                    None if basic => {
                        debug!("advanced search found nothing, falling back");
                        advanced = false;
                    }
                    None => return Err(ResolveError::not_found(metadata)),
                }
                continue;
            }

            if basic {
                debug!(title = %metadata.raw_title, "entering basic search mode");
                let candidates = self
                    .client
                    .search_title_basic(metadata.media_type, &metadata.raw_title)
                    .await?;

                match self.selector.select(&candidates, metadata.year.as_deref()) {
                    Some(index) => {
                        metadata.remote_id = Some(candidates[index].remote_id.clone());
                        continue;
                    }
                    None => return Err(ResolveError::not_found(metadata)),
                }
            }

            return Err(ResolveError::not_found(metadata));
        }
    }
}
