//! Query resolution for similar-title listings.
//!
//! Turns the raw path identifier and `page` query parameter into exactly one
//! provider fetch. Invalid identifiers never reach the provider.

use std::sync::Arc;

use sora_common::{Error, Locale, MediaType, Page, Result, SimilarResult, TvId};
use tracing::{debug, instrument};

use crate::metadata::SimilarProvider;

/// Caching tier a resolved response belongs to.
///
/// The tier is fixed per page kind; the HTTP layer maps it to the configured
/// `Cache-Control` policy string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTier {
    /// A single title and its sub-pages.
    Detail,
}

/// A validated similar-titles query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarQuery {
    /// The show whose similar titles are requested.
    pub id: TvId,
    /// Requested page; `None` lets the provider choose.
    pub page: Option<Page>,
}

impl SimilarQuery {
    /// Validate raw request input.
    ///
    /// The identifier must be a strictly positive number, otherwise the
    /// query is [`Error::NotFound`]. The page never fails: non-numeric input
    /// is dropped and out-of-range input resets to page 1.
    pub fn parse(raw_id: &str, raw_page: Option<&str>) -> Result<Self> {
        Ok(Self {
            id: TvId::parse(raw_id)?,
            page: Page::from_query(raw_page),
        })
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The provider result, unmodified.
    pub similar: SimilarResult,
    /// Caching tier for the response.
    pub cache: CacheTier,
}

/// Resolves similar-title queries against a [`SimilarProvider`].
#[derive(Clone)]
pub struct QueryResolver {
    provider: Arc<dyn SimilarProvider>,
}

impl QueryResolver {
    /// Create a resolver backed by `provider`.
    pub fn new(provider: Arc<dyn SimilarProvider>) -> Self {
        Self { provider }
    }

    /// Name of the backing provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Resolve one page of TV shows similar to `raw_id`.
    ///
    /// Issues at most one fetch. Both an invalid identifier and an absent
    /// provider result are [`Error::NotFound`]; provider failures are
    /// returned unchanged.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn resolve(
        &self,
        raw_id: &str,
        raw_page: Option<&str>,
        locale: &Locale,
    ) -> Result<Resolved> {
        let query = SimilarQuery::parse(raw_id, raw_page)?;
        debug!(id = %query.id, page = ?query.page, "Fetching similar titles");

        let similar = self
            .provider
            .fetch_similar(MediaType::Tv, query.id.get(), query.page, locale)
            .await?
            .ok_or_else(|| Error::not_found(format!("similar titles for tv show {}", query.id)))?;

        Ok(Resolved {
            similar,
            cache: CacheTier::Detail,
        })
    }
}
