// src/pipeline/reveal.rs

use crate::domain::ContentRecord;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Distance (px) below the viewport at which the sentinel counts as visible.
pub const DEFAULT_LOOKAHEAD: u32 = 200;

/// The growing prefix of a filtered, sorted collection that is currently rendered.
///
/// Invariant: `visible_count <= total`. Within one collection the count only
/// grows; a different collection resets it to one page.
#[derive(Debug, Clone)]
pub struct RevealWindow {
    page_size: usize,
    visible_count: usize,
    total: usize,
    fingerprint: Option<u64>,
}

impl RevealWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            visible_count: 0,
            total: 0,
            fingerprint: None,
        }
    }

    /// Rebuilds a window from a client-reported count on a stateless request.
    ///
    /// `shown` is clamped to `[min(page_size, total), total]`.
    pub fn resume(page_size: usize, total: usize, shown: usize) -> Self {
        let page_size = page_size.max(1);
        let floor = page_size.min(total);
        Self {
            page_size,
            visible_count: shown.clamp(floor, total),
            total,
            fingerprint: None,
        }
    }

    /// Points the window at `collection`, resetting to one page when it is not
    /// the collection seen on the previous call. Returns `true` on reset.
    pub fn sync<R: ContentRecord>(&mut self, collection: &[R]) -> bool {
        let fingerprint = fingerprint(collection);
        if self.fingerprint == Some(fingerprint) {
            return false;
        }

        self.fingerprint = Some(fingerprint);
        self.total = collection.len();
        self.visible_count = self.page_size.min(self.total);
        true
    }

    /// Grows the window by one page, clamped to the total.
    /// Returns `false` once everything is visible.
    pub fn load_more(&mut self) -> bool {
        if self.visible_count >= self.total {
            return false;
        }
        self.visible_count = (self.visible_count + self.page_size).min(self.total);
        true
    }

    /// `load_more`, returning the index range that just became visible.
    pub fn advance(&mut self) -> Range<usize> {
        let start = self.visible_count;
        self.load_more();
        start..self.visible_count
    }

    pub fn visible<'c, R>(&self, collection: &'c [R]) -> &'c [R] {
        &collection[..self.visible_count.min(collection.len())]
    }

    pub fn has_more(&self) -> bool {
        self.visible_count < self.total
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Identity of a collection: its ordered ids. A refilter or resort that yields
/// the same ids in the same order is the same collection.
fn fingerprint<R: ContentRecord>(collection: &[R]) -> u64 {
    let mut hasher = DefaultHasher::new();
    collection.len().hash(&mut hasher);
    for record in collection {
        record.id().hash(&mut hasher);
    }
    hasher.finish()
}
