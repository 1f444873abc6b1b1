//! Concrete similar-item provider implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`SimilarProvider`](super::SimilarProvider) trait.

pub mod tmdb;

pub use tmdb::TmdbProvider;
