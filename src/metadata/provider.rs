//! Trait definition for similar-item providers.
//!
//! This module defines the [`SimilarProvider`] trait that metadata backends
//! implement to serve "more like this" listings.

use async_trait::async_trait;
use sora_common::{Locale, MediaType, Page, Result, SimilarResult};

/// Async trait that all similar-item providers must implement.
///
/// Providers wrap a single external API and are shared across request tasks,
/// so they are held behind an `Arc`.
#[async_trait]
pub trait SimilarProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the provider has been configured with valid
    /// credentials and is ready to serve requests.
    fn is_available(&self) -> bool;

    /// Fetch one page of titles similar to `id`, localized to `locale`.
    ///
    /// `page` is forwarded only when present; otherwise the provider serves
    /// its default page.
    ///
    /// Returns `Ok(None)` when the provider has nothing for this title (the
    /// title is unknown or the payload is empty). Transport and protocol
    /// failures are `Err`.
    async fn fetch_similar(
        &self,
        media_type: MediaType,
        id: u64,
        page: Option<Page>,
        locale: &Locale,
    ) -> Result<Option<SimilarResult>>;
}
