//! Page numbers resolved from user input.

use serde::{Deserialize, Serialize};

use crate::ids::to_number;

/// A 1-based page number, always within [`Page::MIN`]..=[`Page::MAX`].
///
/// Provider pagination stops at page 1000, so anything outside that window
/// is reset to the first page rather than rejected. The reset is one-sided:
/// `1001` becomes `1`, not `1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Page(u16);

impl Page {
    /// Lowest valid page.
    pub const MIN: u32 = 1;
    /// Highest page the provider will serve.
    pub const MAX: u32 = 1000;
    /// The first page.
    pub const FIRST: Page = Page(1);

    /// Resolve the optional `page` query parameter.
    ///
    /// - absent, empty or non-numeric: `None` (the provider picks its own
    ///   default page)
    /// - numeric: [`Page::clamp`]ed
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        raw.and_then(to_number).map(Self::clamp)
    }

    /// Reset an out-of-range page to the first page.
    ///
    /// Fractional values are truncated toward zero before the range check.
    pub fn clamp(value: f64) -> Self {
        let value = value.trunc();
        if value.is_nan() || value < f64::from(Self::MIN) || value > f64::from(Self::MAX) {
            Self::FIRST
        } else {
            Self(value as u16)
        }
    }

    /// Build a page from an in-range value.
    pub fn new(page: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&page)
            .then(|| Self(page as u16))
    }

    /// The page number.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<Page> for u32 {
    fn from(page: Page) -> Self {
        page.get()
    }
}

impl TryFrom<u32> for Page {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Page::new(value).ok_or_else(|| format!("page {value} out of range"))
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
