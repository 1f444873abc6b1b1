//! HTTP client for a running sora server.
//!
//! Follows the navigation targets produced by the page-state controller and
//! decodes the listing payload.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use sora_common::{Error, Locale, Result, SimilarResult, TvId};

use crate::server::routes_similar::SimilarResponse;
use crate::similar::{
    DetachedAnchor, HistoryNavigator, NavigationTarget, PageState, PageStateController,
};

/// Connection timeout for page requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches listing pages from a sora server.
pub struct PageClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    locale: Option<Locale>,
}

impl PageClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            locale: None,
        }
    }

    /// Send `Authorization: Bearer <api_key>` with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Send `Accept-Language: <locale>` with every request.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Fetch the listing page a navigation points at.
    pub async fn fetch(&self, target: &NavigationTarget) -> Result<SimilarResult> {
        let url = format!("{}{}", self.base_url, target.path());
        tracing::debug!(url = %url, ticket = target.ticket(), "Fetching listing page");

        let mut request = self.client.get(&url);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(ref locale) = self.locale {
            request = request.header(header::ACCEPT_LANGUAGE, locale.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::upstream("sora", format!("failed to GET {url}: {e}")))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(Error::not_found(format!("tv show {}", target.tv_id())))
            }
            StatusCode::UNAUTHORIZED => return Err(Error::Unauthorized),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::upstream("sora", format!("{status}: {body}")));
            }
            _ => {}
        }

        let body: SimilarResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream("sora", format!("invalid listing payload: {e}")))?;
        Ok(body.similar)
    }
}

/// Headless listing session: a page-state controller whose navigations are
/// followed with a [`PageClient`].
pub type BrowseSession = PageStateController<HistoryNavigator, DetachedAnchor>;

/// Open `page` of the listing for `tv_id` and wait for it to render.
pub async fn browse(client: &PageClient, tv_id: TvId, page: u32) -> Result<BrowseSession> {
    let mut session = PageStateController::new(tv_id, HistoryNavigator::default(), DetachedAnchor);
    session.on_page_change(page);
    follow(client, &mut session).await?;
    Ok(session)
}

/// Fetch the in-flight navigation, if any, and hand the result to the
/// controller.
pub async fn follow(client: &PageClient, session: &mut BrowseSession) -> Result<()> {
    let Some(target) = current_target(session) else {
        return Ok(());
    };
    let result = client.fetch(&target).await?;
    session.on_rendered(target.ticket(), result);
    Ok(())
}

fn current_target(session: &BrowseSession) -> Option<NavigationTarget> {
    match session.state() {
        PageState::Navigating(target) => Some(target.clone()),
        PageState::Idle => None,
    }
}
