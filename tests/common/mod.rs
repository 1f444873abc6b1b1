//! Shared test harness for integration tests.
//!
//! Provides [`RecordingProvider`], a [`SimilarProvider`] that records every
//! fetch and answers from a canned script, and helpers that build an
//! [`AppContext`] or a live server around it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use sora::config::Config;
use sora::metadata::SimilarProvider;
use sora::server::{create_router, AppContext};
use sora_common::{Error, Locale, MediaSummary, MediaType, Page, Result, SimilarResult};

/// One recorded provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub media_type: MediaType,
    pub id: u64,
    pub page: Option<Page>,
    pub locale: Locale,
}

/// How the provider answers.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// `total_pages` pages of `per_page` items each.
    Pages { total_pages: u32, per_page: usize },
    /// No result.
    Nothing,
    /// Upstream failure.
    Fail,
}

pub struct RecordingProvider {
    reply: Reply,
    calls: Mutex<Vec<FetchCall>>,
}

impl RecordingProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn pages() -> Arc<Self> {
        Self::new(Reply::Pages {
            total_pages: 12,
            per_page: 20,
        })
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().clone()
    }
}

pub fn summary(id: u64) -> MediaSummary {
    MediaSummary {
        id,
        media_type: MediaType::Tv,
        title: format!("Show {id}"),
        original_title: None,
        overview: Some("An overview".into()),
        poster_path: Some(format!("https://image.tmdb.org/t/p/original/{id}.jpg")),
        backdrop_path: None,
        vote_average: Some(7.5),
        vote_count: Some(100),
        popularity: Some(12.0),
        release_date: Some("2011-04-17".into()),
        genre_ids: vec![18],
        original_language: Some("en".into()),
    }
}

#[async_trait]
impl SimilarProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn fetch_similar(
        &self,
        media_type: MediaType,
        id: u64,
        page: Option<Page>,
        locale: &Locale,
    ) -> Result<Option<SimilarResult>> {
        self.calls.lock().push(FetchCall {
            media_type,
            id,
            page,
            locale: locale.clone(),
        });

        match self.reply {
            Reply::Nothing => Ok(None),
            Reply::Fail => Err(Error::upstream("recording", "connection reset")),
            Reply::Pages {
                total_pages,
                per_page,
            } => {
                let page = page.map_or(1, Page::get);
                let first = u64::from(page - 1) * per_page as u64;
                Ok(Some(SimilarResult {
                    items: (1..=per_page as u64).map(|i| summary(first + i)).collect(),
                    page,
                    total_pages,
                    total_results: total_pages * per_page as u32,
                }))
            }
        }
    }
}

/// Create a test context with default configuration
pub fn create_test_context(provider: Arc<RecordingProvider>) -> AppContext {
    AppContext::new(Config::default(), provider)
}

/// Create a test context with custom configuration
pub fn create_test_context_with_config(
    config: Config,
    provider: Arc<RecordingProvider>,
) -> AppContext {
    AppContext::new(config, provider)
}

/// Start an Axum server on a random port and return the bound address.
pub async fn spawn_server(ctx: AppContext) -> SocketAddr {
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind random port");
    let addr = listener.local_addr().expect("failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    addr
}
