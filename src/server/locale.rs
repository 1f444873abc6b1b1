//! Per-request locale resolution.
//!
//! The language is looked up, in order, from the `lng` query parameter, the
//! `i18next` cookie and the `Accept-Language` header. The first candidate
//! that matches a supported language wins; otherwise the fallback language
//! is used.

use async_trait::async_trait;
use axum::http::{header, request::Parts};
use axum_extra::extract::cookie::CookieJar;
use sora_common::{Locale, Result};

use super::params::first_query_value;
use crate::config::I18nConfig;

/// Query parameter carrying an explicit language choice.
pub const LANGUAGE_QUERY_PARAM: &str = "lng";
/// Cookie remembering the language choice.
pub const LANGUAGE_COOKIE: &str = "i18next";

/// Supplies the language tag for a request.
#[async_trait]
pub trait LocaleResolver: Send + Sync {
    async fn resolve_locale(&self, parts: &Parts) -> Result<Locale>;
}

/// [`LocaleResolver`] negotiating against the `[i18n]` config section.
#[derive(Debug, Clone)]
pub struct NegotiatingLocaleResolver {
    supported: Vec<String>,
    fallback: String,
}

impl NegotiatingLocaleResolver {
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            supported: config.supported_languages.clone(),
            fallback: config.fallback_language.clone(),
        }
    }

    /// Map a requested tag onto a supported language.
    ///
    /// Exact matches win; `pt-BR` otherwise falls back to `pt`.
    fn match_supported(&self, requested: &str) -> Option<&str> {
        let requested = requested.trim();
        if requested.is_empty() || requested == "*" {
            return None;
        }

        if let Some(exact) = self
            .supported
            .iter()
            .find(|s| s.eq_ignore_ascii_case(requested))
        {
            return Some(exact);
        }

        let primary = requested.split(['-', '_']).next()?;
        self.supported
            .iter()
            .find(|s| s.eq_ignore_ascii_case(primary))
            .map(String::as_str)
    }

    fn negotiate<'a>(&self, candidates: impl IntoIterator<Item = &'a str>) -> Locale {
        candidates
            .into_iter()
            .find_map(|c| self.match_supported(c))
            .map(Locale::new)
            .unwrap_or_else(|| Locale::new(self.fallback.clone()))
    }
}

/// Parse an `Accept-Language` value into tags ordered by descending quality.
///
/// Tags with `q=0` are dropped; equal qualities keep header order.
pub fn parse_accept_language(value: &str) -> Vec<&str> {
    let mut weighted: Vec<(&str, f32)> = value
        .split(',')
        .filter_map(|entry| {
            let mut pieces = entry.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let quality = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

#[async_trait]
impl LocaleResolver for NegotiatingLocaleResolver {
    async fn resolve_locale(&self, parts: &Parts) -> Result<Locale> {
        let from_query = first_query_value(&parts.uri, LANGUAGE_QUERY_PARAM);

        let jar = CookieJar::from_headers(&parts.headers);
        let from_cookie = jar.get(LANGUAGE_COOKIE).map(|c| c.value().to_string());

        let accept = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        let candidates = from_query
            .as_deref()
            .into_iter()
            .chain(from_cookie.as_deref())
            .chain(parse_accept_language(accept));

        Ok(self.negotiate(candidates))
    }
}
