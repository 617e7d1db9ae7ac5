//! Browse pipeline: source collection -> filters -> sort -> reveal window.

pub mod filter;
pub mod reveal;
pub mod sort;
pub mod viewport;

#[cfg(test)]
pub(crate) mod fixtures;

pub use filter::{apply_filters, FilterState, Selection};
pub use reveal::RevealWindow;
pub use sort::{sort_records, SortKey};
pub use viewport::{InfiniteScroll, Observation, ScrollSentinel, Viewport};

use crate::domain::ContentRecord;

/// Filtered and sorted copy of `records`, ready for windowing.
pub fn shape<R>(records: &[R], state: &FilterState) -> Vec<R>
where
    R: ContentRecord + Clone,
{
    sort_records(&apply_filters(records, state), state.sort)
}

/// One response's worth of a browse page.
#[derive(Debug)]
pub struct BrowseView<R> {
    /// Cards to render in this response.
    pub items: Vec<R>,
    /// Cards rendered so far, including `items`.
    pub shown: usize,
    /// Size of the whole filtered collection.
    pub total: usize,
    pub has_more: bool,
}

/// First window of a freshly filtered collection (full page load).
pub fn first_window<R>(records: &[R], state: &FilterState, page_size: usize) -> BrowseView<R>
where
    R: ContentRecord + Clone,
{
    let shaped = shape(records, state);
    let mut window = RevealWindow::new(page_size);
    window.sync(&shaped);

    BrowseView {
        items: window.visible(&shaped).to_vec(),
        shown: window.visible_count(),
        total: window.total(),
        has_more: window.has_more(),
    }
}

/// The window after `shown` cards (sentinel request). Only the newly revealed
/// cards are returned.
pub fn next_window<R>(
    records: &[R],
    state: &FilterState,
    page_size: usize,
    shown: usize,
) -> BrowseView<R>
where
    R: ContentRecord + Clone,
{
    let shaped = shape(records, state);
    let mut window = RevealWindow::resume(page_size, shaped.len(), shown);
    let range = window.advance();

    BrowseView {
        items: shaped[range].to_vec(),
        shown: window.visible_count(),
        total: window.total(),
        has_more: window.has_more(),
    }
}
