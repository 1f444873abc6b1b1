//! Route metadata for the similar-titles page: Open Graph URL and the
//! breadcrumb shown in the show's sub-navigation.

use serde::Serialize;

use super::controller::listing_path;

/// Breadcrumb label.
pub const BREADCRUMB_LABEL: &str = "Similar Tv Shows";
/// Accessible name of the breadcrumb link.
pub const BREADCRUMB_ARIA_LABEL: &str = "Similar Tv";

/// Sub-navigation entry linking to the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub href: String,
    pub label: &'static str,
    pub aria_label: &'static str,
}

/// Head metadata and breadcrumb for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub og_url: String,
    pub breadcrumb: Breadcrumb,
}

impl RouteMeta {
    /// Build metadata for the listing of `raw_tv_id` on `site_url`.
    ///
    /// The id is echoed as given; metadata is produced even for ids the
    /// resolver would reject.
    pub fn for_listing(site_url: &str, raw_tv_id: &str) -> Self {
        let path = listing_path(raw_tv_id);
        Self {
            og_url: format!("{}{path}", site_url.trim_end_matches('/')),
            breadcrumb: Breadcrumb {
                href: path,
                label: BREADCRUMB_LABEL,
                aria_label: BREADCRUMB_ARIA_LABEL,
            },
        }
    }
}
