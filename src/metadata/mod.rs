//! Metadata provider system for similar-title listings.
//!
//! This module defines the [`SimilarProvider`] trait and its concrete
//! backends.
//!
//! # Module layout
//!
//! - [`provider`] -- Trait definition.
//! - [`providers`] -- Concrete provider implementations (TMDB).

pub mod provider;
pub mod providers;

pub use provider::SimilarProvider;
pub use providers::TmdbProvider;
