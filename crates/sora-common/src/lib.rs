//! Sora-Common: Shared types and errors.
//!
//! This crate provides the domain vocabulary used across sora:
//!
//! - **Typed IDs**: [`TvId`], a validated TMDB TV show identifier
//! - **Paging**: [`Page`], a bounds-checked page number parsed from a query string
//! - **Locale**: [`Locale`], an opaque language tag passed through to providers
//! - **Core Types**: [`MediaType`], [`SimilarResult`] and [`MediaSummary`]
//! - **Error Handling**: Common error type and result alias
//!
//! # Examples
//!
//! ```
//! use sora_common::{Page, TvId, Error, Result};
//!
//! let id = TvId::parse("550").unwrap();
//! assert_eq!(id.get(), 550);
//!
//! // Out-of-range pages reset to the first page.
//! assert_eq!(Page::from_query(Some("2000")), Some(Page::FIRST));
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("tv show"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod locale;
pub mod page;
pub mod types;

pub use error::{Error, Result};
pub use ids::TvId;
pub use locale::Locale;
pub use page::Page;
pub use types::*;
