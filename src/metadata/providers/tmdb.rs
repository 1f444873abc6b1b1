//! TMDB (The Movie Database) similar-titles provider.
//!
//! Implements [`SimilarProvider`] by querying the TMDB v3 REST API.
//!
//! Features:
//! - Token-bucket rate limiting via [`governor`]; callers wait for a slot
//!   instead of failing.
//! - Configurable request timeout.
//! - No retries: a failed request is reported to the caller as-is.

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use sora_common::{Error, Locale, MediaSummary, MediaType, Page, Result, SimilarResult};

use crate::config::TmdbConfig;
use crate::metadata::provider::SimilarProvider;

const PROVIDER_NAME: &str = "tmdb";

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbPagedResponse {
    page: u32,
    #[serde(default)]
    results: Vec<TmdbListResult>,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u32,
}

/// A list entry; movies carry `title`/`release_date`, TV shows carry
/// `name`/`first_air_date`.
#[derive(Debug, Deserialize)]
struct TmdbListResult {
    id: u64,
    #[serde(alias = "name")]
    title: Option<String>,
    #[serde(alias = "original_name")]
    original_title: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f64>,
    vote_count: Option<u64>,
    popularity: Option<f64>,
    #[serde(alias = "first_air_date")]
    release_date: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u32>,
    original_language: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

type DirectLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// TMDB similar-titles provider.
///
/// # Examples
///
/// ```no_run
/// use sora::config::TmdbConfig;
/// use sora::metadata::providers::TmdbProvider;
///
/// let config = TmdbConfig {
///     api_key: "your-api-key".into(),
///     ..TmdbConfig::default()
/// };
/// let provider = TmdbProvider::new(&config).unwrap();
/// ```
pub struct TmdbProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
    rate_limiter: DirectLimiter,
}

impl TmdbProvider {
    /// Create a new TMDB provider from configuration.
    pub fn new(config: &TmdbConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build TMDB client: {e}")))?;

        let per_second = NonZeroU32::new(config.requests_per_second)
            .ok_or_else(|| Error::invalid_input("tmdb.requests_per_second must be > 0"))?;
        let rate_limiter = RateLimiter::direct(Quota::per_second(per_second));

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Execute a rate-limited GET. Non-success statuses other than 404 are
    /// upstream errors; 404 is returned as `None`.
    async fn get(
        &self,
        path: &str,
        locale: &Locale,
        extra_params: &[(&str, String)],
    ) -> Result<Option<Vec<u8>>> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{path}", self.base_url);
        let mut params: Vec<(&str, &str)> = vec![
            ("api_key", self.api_key.as_str()),
            ("language", locale.as_str()),
        ];
        params.extend(extra_params.iter().map(|(k, v)| (*k, v.as_str())));

        debug!(path = %path, language = %locale, ?extra_params, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::upstream(PROVIDER_NAME, format!("request failed: {e}")))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            debug!(path = %path, "TMDB returned 404");
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(path = %path, %status, "TMDB returned error status");
            return Err(Error::upstream(PROVIDER_NAME, format!("{status}: {body}")));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::upstream(PROVIDER_NAME, format!("read error: {e}")))?;
        Ok(Some(bytes.to_vec()))
    }

    /// Convert a TMDB image path fragment to a full URL.
    fn image_url(&self, path: &str) -> String {
        format!("{}{path}", self.image_base_url)
    }

    fn to_summary(&self, media_type: MediaType, r: TmdbListResult) -> MediaSummary {
        MediaSummary {
            id: r.id,
            media_type,
            title: r.title.unwrap_or_default(),
            original_title: r.original_title,
            overview: r.overview,
            poster_path: r.poster_path.map(|p| self.image_url(&p)),
            backdrop_path: r.backdrop_path.map(|p| self.image_url(&p)),
            vote_average: r.vote_average,
            vote_count: r.vote_count,
            popularity: r.popularity,
            release_date: r.release_date.filter(|d| !d.is_empty()),
            genre_ids: r.genre_ids,
            original_language: r.original_language,
        }
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Decode a paged listing; `null` decodes to `None`.
fn parse_paged(body: &[u8]) -> Result<Option<TmdbPagedResponse>> {
    serde_json::from_slice(body)
        .map_err(|e| Error::upstream(PROVIDER_NAME, format!("parse error: {e}")))
}

#[async_trait]
impl SimilarProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn fetch_similar(
        &self,
        media_type: MediaType,
        id: u64,
        page: Option<Page>,
        locale: &Locale,
    ) -> Result<Option<SimilarResult>> {
        let path = format!("/{media_type}/{id}/similar");
        let extra: Vec<(&str, String)> = page
            .map(|p| vec![("page", p.to_string())])
            .unwrap_or_default();

        let Some(body) = self.get(&path, locale, &extra).await? else {
            return Ok(None);
        };
        if is_blank(&body) {
            debug!(path = %path, "TMDB returned an empty payload");
            return Ok(None);
        }

        let Some(paged) = parse_paged(&body)? else {
            return Ok(None);
        };

        Ok(Some(SimilarResult {
            items: paged
                .results
                .into_iter()
                .map(|r| self.to_summary(media_type, r))
                .collect(),
            page: paged.page,
            total_pages: paged.total_pages,
            total_results: paged.total_results,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: &str) -> TmdbProvider {
        TmdbProvider::new(&TmdbConfig {
            api_key: api_key.into(),
            ..TmdbConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn image_url_construction() {
        assert_eq!(
            provider("key").image_url("/abc123.jpg"),
            "https://image.tmdb.org/t/p/original/abc123.jpg"
        );
    }

    #[test]
    fn provider_is_available() {
        assert!(provider("test-key").is_available());
        assert!(!provider("").is_available());
    }

    #[test]
    fn provider_name() {
        assert_eq!(provider("key").name(), "tmdb");
    }

    #[test]
    fn zero_rate_is_rejected() {
        let config = TmdbConfig {
            requests_per_second: 0,
            ..TmdbConfig::default()
        };
        assert!(TmdbProvider::new(&config).is_err());
    }

    #[test]
    fn tv_results_map_name_fields() {
        let body = br#"{
            "page": 1,
            "results": [{
                "id": 1399,
                "name": "Game of Thrones",
                "original_name": "Game of Thrones",
                "first_air_date": "2011-04-17",
                "poster_path": "/p.jpg",
                "genre_ids": [18, 10765]
            }],
            "total_pages": 3,
            "total_results": 60
        }"#;
        let paged = parse_paged(body).unwrap().unwrap();
        assert_eq!(paged.total_pages, 3);

        let p = provider("key");
        let summary = p.to_summary(MediaType::Tv, paged.results.into_iter().next().unwrap());
        assert_eq!(summary.title, "Game of Thrones");
        assert_eq!(summary.release_date.as_deref(), Some("2011-04-17"));
        assert_eq!(
            summary.poster_path.as_deref(),
            Some("https://image.tmdb.org/t/p/original/p.jpg")
        );
        assert_eq!(summary.backdrop_path, None);
        assert_eq!(summary.genre_ids, vec![18, 10765]);
    }

    #[test]
    fn null_payload_is_none() {
        assert!(parse_paged(b"null").unwrap().is_none());
        assert!(is_blank(b"  \n"));
        assert!(!is_blank(b"{}"));
    }

    #[test]
    fn malformed_payload_is_upstream_error() {
        let err = parse_paged(b"{\"results\": 5}").unwrap_err();
        assert!(matches!(err, Error::Upstream { .. }));
    }
}
