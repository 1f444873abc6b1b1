//! Client-side page state for a similar-titles listing.
//!
//! The controller owns the current page and total pages of the rendered
//! listing. A page change builds a navigation target, hands it to the
//! [`Navigator`] (which starts a new request cycle) and scrolls the listing
//! anchor back into view. Navigation and scrolling are independent: a
//! missing anchor never blocks navigation.

use std::fmt;

use parking_lot::Mutex;
use sora_common::{MediaSummary, SimilarResult, TvId};
use tracing::debug;

/// Where a page change navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    tv_id: TvId,
    page: u32,
    ticket: u64,
}

impl NavigationTarget {
    /// The show whose listing is navigated.
    pub fn tv_id(&self) -> TvId {
        self.tv_id
    }

    /// The requested page, exactly as chosen by the user.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Sequence number of this navigation; later navigations have larger
    /// tickets.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Route path including the `page` query parameter.
    pub fn path(&self) -> String {
        format!("{}?page={}", listing_path(self.tv_id), self.page)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Route path of the similar-titles listing for `tv_id`.
pub fn listing_path(tv_id: impl fmt::Display) -> String {
    format!("/tv-shows/{tv_id}/similar")
}

/// Starts a route transition.
pub trait Navigator {
    /// Navigate to `target`. A newer navigation supersedes an older one.
    fn navigate(&self, target: &NavigationTarget);
}

/// Scroll easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Alignment of the anchor within the viewport on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
    End,
    Nearest,
}

/// Arguments for [`ScrollAnchor::scroll_into_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlign,
    pub inline: ScrollAlign,
}

impl ScrollOptions {
    /// Smooth scroll bringing the top of the listing to the top of the
    /// viewport.
    pub const LISTING_TOP: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollAlign::Start,
        inline: ScrollAlign::Center,
    };
}

/// Why a scroll did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    #[error("scroll anchor is not mounted")]
    NotMounted,
}

/// The element marking the top of the listing.
pub trait ScrollAnchor {
    /// Scroll the anchor into view.
    fn scroll_into_view(&self, options: ScrollOptions) -> Result<(), ScrollError>;
}

/// An anchor that is never mounted (headless clients).
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedAnchor;

impl ScrollAnchor for DetachedAnchor {
    fn scroll_into_view(&self, _options: ScrollOptions) -> Result<(), ScrollError> {
        Err(ScrollError::NotMounted)
    }
}

/// In-memory navigator keeping a history stack, like a memory router.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<NavigationTarget>>,
}

impl HistoryNavigator {
    /// The most recent navigation, if any.
    pub fn current(&self) -> Option<NavigationTarget> {
        self.entries.lock().last().cloned()
    }

    /// Number of navigations recorded.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been navigated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, target: &NavigationTarget) {
        self.entries.lock().push(target.clone());
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, target: &NavigationTarget) {
        (**self).navigate(target)
    }
}

impl<A: ScrollAnchor + ?Sized> ScrollAnchor for &A {
    fn scroll_into_view(&self, options: ScrollOptions) -> Result<(), ScrollError> {
        (**self).scroll_into_view(options)
    }
}

/// Controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Awaiting user interaction.
    Idle,
    /// A route transition is in flight.
    Navigating(NavigationTarget),
}

/// What the grid renderer needs to draw pagination controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationProps<'a> {
    pub items: &'a [MediaSummary],
    pub total_pages: u32,
    pub current_page: u32,
}

/// Page-state controller for one show's similar-titles listing.
pub struct PageStateController<N, A> {
    tv_id: TvId,
    navigator: N,
    anchor: A,
    state: PageState,
    rendered: Option<SimilarResult>,
    next_ticket: u64,
}

impl<N: Navigator, A: ScrollAnchor> PageStateController<N, A> {
    /// Create an idle controller with nothing rendered yet.
    pub fn new(tv_id: TvId, navigator: N, anchor: A) -> Self {
        Self {
            tv_id,
            navigator,
            anchor,
            state: PageState::Idle,
            rendered: None,
            next_ticket: 1,
        }
    }

    /// Create an idle controller showing an already-resolved result.
    pub fn with_result(tv_id: TvId, navigator: N, anchor: A, result: SimilarResult) -> Self {
        let mut controller = Self::new(tv_id, navigator, anchor);
        controller.rendered = Some(result);
        controller
    }

    /// Handle a page change chosen in the pagination control.
    ///
    /// `new_page` is not validated; the resolver clamps it on the next
    /// request. The scroll is attempted exactly once and its failure is
    /// ignored.
    pub fn on_page_change(&mut self, new_page: u32) -> NavigationTarget {
        let target = NavigationTarget {
            tv_id: self.tv_id,
            page: new_page,
            ticket: self.next_ticket,
        };
        self.next_ticket += 1;

        if let PageState::Navigating(stale) = &self.state {
            debug!(stale = %stale, "Superseding in-flight navigation");
        }
        self.state = PageState::Navigating(target.clone());
        self.navigator.navigate(&target);

        if let Err(e) = self.anchor.scroll_into_view(ScrollOptions::LISTING_TOP) {
            debug!(error = %e, "Skipping scroll to listing top");
        }

        target
    }

    /// Record that the result for navigation `ticket` has been rendered.
    ///
    /// Returns `false` (and changes nothing) when `ticket` belongs to a
    /// navigation that has since been superseded.
    pub fn on_rendered(&mut self, ticket: u64, result: SimilarResult) -> bool {
        match &self.state {
            PageState::Navigating(target) if target.ticket == ticket => {
                self.rendered = Some(result);
                self.state = PageState::Idle;
                true
            }
            _ => {
                debug!(ticket, "Ignoring render for superseded navigation");
                false
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// The show this controller navigates.
    pub fn tv_id(&self) -> TvId {
        self.tv_id
    }

    /// The last rendered result.
    pub fn rendered(&self) -> Option<&SimilarResult> {
        self.rendered.as_ref()
    }

    /// The grid is only drawn when the rendered page has items.
    pub fn should_render(&self) -> bool {
        self.rendered.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Props for the pagination renderer, if there is anything to render.
    pub fn pagination(&self) -> Option<PaginationProps<'_>> {
        self.rendered
            .as_ref()
            .filter(|r| !r.is_empty())
            .map(|r| PaginationProps {
                items: &r.items,
                total_pages: r.total_pages,
                current_page: r.page,
            })
    }
}
