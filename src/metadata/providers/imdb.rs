//! IMDb lookup client.
//!
//! Implements [`LookupClient`] against the imdb-api.com REST API.
//!
//! Features:
//! - Token-bucket rate limiting at 4 requests / second via [`governor`].
//! - 30-second request timeout.
//! - Every response's `errorMessage` field is inspected; a non-empty value is
//!   surfaced as [`LookupError::Remote`].
//! - The API key is redacted from logged URLs.

use std::collections::BTreeSet;
use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use reelname_common::MediaType;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::metadata::provider::{
    EpisodeRecord, LookupClient, LookupError, ResolvedTitle, SearchCandidate,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default API endpoint.
pub const IMDB_BASE_URL: &str = "https://imdb-api.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(4) {
    Some(n) => n,
    None => unreachable!(),
};
/// Minutes either side of the probed runtime accepted by advanced search.
const RUNTIME_TOLERANCE: u32 = 5;

// ---------------------------------------------------------------------------
// IMDb API response types (private)
// ---------------------------------------------------------------------------

/// Every endpoint carries `errorMessage` next to its payload.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
    #[serde(flatten)]
    body: T,
}

#[derive(Debug, Deserialize)]
struct ImdbSearchResponse {
    #[serde(default)]
    results: Option<Vec<ImdbSearchResult>>,
}

#[derive(Debug, Deserialize)]
struct ImdbSearchResult {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImdbTitle {
    id: Option<String>,
    title: Option<String>,
    year: Option<String>,
    genres: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImdbSeasonEpisodes {
    #[serde(default)]
    episodes: Option<Vec<ImdbEpisode>>,
}

#[derive(Debug, Deserialize)]
struct ImdbEpisode {
    #[serde(default)]
    title: Option<String>,
}

// ---------------------------------------------------------------------------
// Client implementation
// ---------------------------------------------------------------------------

/// IMDb lookup client.
///
/// # Examples
///
/// ```no_run
/// use reelname::metadata::providers::ImdbClient;
///
/// let client = ImdbClient::new("your-api-key", "en", "https://imdb-api.com")?;
/// # Ok::<(), reelname::metadata::LookupError>(())
/// ```
pub struct ImdbClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    language: String,
    rate_limiter: governor::RateLimiter<
        governor::state::NotKeyed,
        governor::state::InMemoryState,
        governor::clock::DefaultClock,
    >,
}

impl ImdbClient {
    /// Create a client for `base_url` using `api_key` and `language`.
    ///
    /// Fails with [`LookupError::MissingApiKey`] on an empty key.
    pub fn new(api_key: &str, language: &str, base_url: &str) -> Result<Self, LookupError> {
        if api_key.trim().is_empty() {
            return Err(LookupError::MissingApiKey);
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.trim().to_string(),
            language: language.to_string(),
            rate_limiter: RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND)),
        })
    }

    /// Build `{base}/{segments...}` with each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Render a URL for logging with the API key masked.
    fn redact(&self, url: &Url) -> String {
        url.as_str().replace(self.api_key.as_str(), "***")
    }

    /// Execute a rate-limited GET and decode the enveloped body.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, LookupError> {
        self.rate_limiter.until_ready().await;

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let envelope = match serde_json::from_str::<Envelope<T>>(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(LookupError::Remote(format!("HTTP {status}")));
            }
            Err(e) => return Err(LookupError::Decode(e.to_string())),
        };

        if let Some(message) = envelope.error_message.filter(|m| !m.is_empty()) {
            return Err(LookupError::Remote(message));
        }
        if !status.is_success() {
            return Err(LookupError::Remote(format!("HTTP {status}")));
        }

        Ok(envelope.body)
    }

    async fn search(&self, url: Url) -> Result<Vec<SearchCandidate>, LookupError> {
        let body: ImdbSearchResponse = self.get(url).await?;
        Ok(body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| SearchCandidate {
                remote_id: r.id,
                title: r.title.unwrap_or_default(),
                description: r.description.unwrap_or_default(),
            })
            .collect())
    }
}

/// `title_type` filter used by advanced search.
fn title_types(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Movie => "feature,tv_movie,video",
        MediaType::Series => "tv_series,tv_miniseries",
    }
}

/// Split the comma-separated `genres` string into a set.
fn parse_genres(genres: Option<&str>) -> BTreeSet<String> {
    genres
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip leading zeros from a season number, keeping a lone `0`.
fn season_param(season: &str) -> &str {
    let stripped = season.trim_start_matches('0');
    if stripped.is_empty() && !season.is_empty() {
        "0"
    } else {
        stripped
    }
}

#[async_trait]
impl LookupClient for ImdbClient {
    async fn search_title_advanced(
        &self,
        media_type: MediaType,
        title: &str,
        year: Option<&str>,
        runtime_minutes: Option<u32>,
    ) -> Result<Vec<SearchCandidate>, LookupError> {
        let mut url = self.url(&["API", "AdvancedSearch", self.api_key.as_str()])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("title", title);
            query.append_pair("title_type", title_types(media_type));
            if let Some(year) = year {
                query.append_pair("release_date", &format!("{year}-01-01,{year}-12-31"));
            }
            if let Some(runtime) = runtime_minutes {
                query.append_pair(
                    "runtime",
                    &format!(
                        "{},{}",
                        runtime.saturating_sub(RUNTIME_TOLERANCE),
                        runtime + RUNTIME_TOLERANCE
                    ),
                );
            }
        }
        debug!(url = %self.redact(&url), "IMDb advanced search");

        self.search(url).await
    }

    async fn search_title_basic(
        &self,
        media_type: MediaType,
        title: &str,
    ) -> Result<Vec<SearchCandidate>, LookupError> {
        let endpoint = match media_type {
            MediaType::Movie => "SearchMovie",
            MediaType::Series => "SearchSeries",
        };
        let url = self.url(&[
            self.language.as_str(),
            "API",
            endpoint,
            self.api_key.as_str(),
            title,
        ])?;
        debug!(url = %self.redact(&url), "IMDb basic search");

        self.search(url).await
    }

    async fn fetch_title(&self, remote_id: &str) -> Result<ResolvedTitle, LookupError> {
        let url = self.url(&[
            self.language.as_str(),
            "API",
            "Title",
            self.api_key.as_str(),
            remote_id,
        ])?;
        debug!(url = %self.redact(&url), "IMDb get title");

        let detail: ImdbTitle = self.get(url).await?;

        Ok(ResolvedTitle {
            remote_id: detail.id.unwrap_or_else(|| remote_id.to_string()),
            title: detail.title.unwrap_or_default(),
            year: detail.year.unwrap_or_default(),
            genres: parse_genres(detail.genres.as_deref()),
            episodes: Vec::new(),
        })
    }

    async fn fetch_episodes(
        &self,
        remote_id: &str,
        season: &str,
    ) -> Result<Vec<EpisodeRecord>, LookupError> {
        let url = self.url(&[
            self.language.as_str(),
            "API",
            "SeasonEpisodes",
            self.api_key.as_str(),
            remote_id,
            season_param(season),
        ])?;
        debug!(url = %self.redact(&url), "IMDb get season episodes");

        let body: ImdbSeasonEpisodes = self.get(url).await?;

        Ok(body
            .episodes
            .unwrap_or_default()
            .into_iter()
            .map(|e| EpisodeRecord {
                episode_title: e.title.unwrap_or_default(),
            })
            .collect())
    }
}
