//! Core type definitions for similar-item listings.
//!
//! Payload types serialize in camelCase, the shape the web client reads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media in the provider's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// A feature film.
    Movie,
    /// A TV series.
    Tv,
}

impl MediaType {
    /// Path segment used by the provider API (`/movie/...`, `/tv/...`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of items similar to a given title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarResult {
    /// Summaries in provider order.
    pub items: Vec<MediaSummary>,
    /// The page the provider actually served.
    pub page: u32,
    /// Number of pages available.
    pub total_pages: u32,
    /// Number of items across all pages.
    #[serde(default)]
    pub total_results: u32,
}

impl SimilarResult {
    /// Returns `true` when the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Summary record for a single title, as rendered in a media grid.
///
/// The query path never inspects these fields; they are passed through to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    /// Provider identifier.
    pub id: u64,
    /// Kind of title.
    pub media_type: MediaType,
    /// Localized title.
    pub title: String,
    /// Title in the original language.
    pub original_title: Option<String>,
    /// Localized synopsis.
    pub overview: Option<String>,
    /// Full URL of the poster image.
    pub poster_path: Option<String>,
    /// Full URL of the backdrop image.
    pub backdrop_path: Option<String>,
    /// Average community rating (0.0 - 10.0).
    pub vote_average: Option<f64>,
    /// Number of community votes.
    pub vote_count: Option<u64>,
    /// Provider popularity score.
    pub popularity: Option<f64>,
    /// First air / release date (YYYY-MM-DD).
    pub release_date: Option<String>,
    /// Provider genre identifiers.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// ISO-639-1 code of the original language.
    pub original_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_display() {
        assert_eq!(MediaType::Tv.to_string(), "tv");
        assert_eq!(MediaType::Movie.to_string(), "movie");
        assert_eq!(serde_json::to_string(&MediaType::Tv).unwrap(), "\"tv\"");
    }

    #[test]
    fn test_similar_result_camel_case() {
        let result = SimilarResult {
            items: vec![],
            page: 2,
            total_pages: 5,
            total_results: 90,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalPages"], 5);
        assert_eq!(json["totalResults"], 90);
        assert_eq!(json["page"], 2);
        assert!(result.is_empty());
    }
}
