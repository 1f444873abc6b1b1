//! Similar-titles listing: server-side query resolution and client-side
//! page state.
//!
//! - [`resolver`] -- validates the request and issues the provider fetch.
//! - [`controller`] -- keeps the rendered page in sync with navigation.
//! - [`meta`] -- Open Graph URL and breadcrumb for the listing route.

pub mod controller;
pub mod meta;
pub mod resolver;

pub use controller::{
    listing_path, DetachedAnchor, HistoryNavigator, NavigationTarget, Navigator, PageState,
    PageStateController, PaginationProps, ScrollAlign, ScrollAnchor, ScrollBehavior,
    ScrollError, ScrollOptions,
};
pub use meta::{Breadcrumb, RouteMeta};
pub use resolver::{CacheTier, QueryResolver, Resolved, SimilarQuery};
