// src/pipeline/sort.rs

use crate::domain::ContentRecord;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Descending `created_at`.
    #[default]
    Newest,
    /// Ascending price, unpriced records last.
    PriceLow,
    /// Descending price, unpriced records last.
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::PriceLow, SortKey::PriceHigh];

    /// Unknown or missing keys fall back to `Newest`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("price-low") => SortKey::PriceLow,
            Some("price-high") => SortKey::PriceHigh,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Most recent",
            SortKey::PriceLow => "Price: low to high",
            SortKey::PriceHigh => "Price: high to low",
        }
    }

    fn compare<R: ContentRecord>(&self, a: &R, b: &R) -> Ordering {
        match self {
            SortKey::Newest => b.created_at().cmp(&a.created_at()),
            SortKey::PriceLow => compare_prices(a.price(), b.price(), false),
            SortKey::PriceHigh => compare_prices(a.price(), b.price(), true),
        }
    }
}

/// `None` sorts after every price in both directions.
fn compare_prices(a: Option<i64>, b: Option<i64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Orders a filtered collection for display.
///
/// Two stable passes: the primary sort by `key`, then (for featurable kinds) a
/// partition that moves featured records ahead of the rest while keeping the
/// primary order inside each group. Ties keep their input order.
pub fn sort_records<R>(records: &[R], key: SortKey) -> Vec<R>
where
    R: ContentRecord + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));

    if !R::FEATURABLE {
        return sorted;
    }

    let (mut featured, rest): (Vec<R>, Vec<R>) =
        sorted.into_iter().partition(|r| r.is_featured());
    featured.extend(rest);
    featured
}
