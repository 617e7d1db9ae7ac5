// src/pipeline/filter.rs

use crate::domain::catalog::{LISTING_TYPES, MARKET_CATEGORIES, POST_TYPES, PROPERTY_TYPES};
use crate::domain::region::is_known_region;
use crate::domain::ContentRecord;
use crate::pipeline::sort::SortKey;
use std::collections::HashMap;

/// A filter dimension: either the "all" sentinel or one slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Missing, empty and "all" are the sentinel.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Selection::All,
            Some(slug) => Selection::Only(slug.to_string()),
        }
    }

    /// Like `parse`, but a slug outside `accept` degrades to `All`.
    pub fn parse_within<F>(raw: Option<&str>, accept: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        match Self::parse(raw) {
            Selection::Only(slug) if !accept(&slug) => Selection::All,
            sel => sel,
        }
    }

    pub fn constraint(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(slug) => Some(slug),
        }
    }

    pub fn as_param(&self) -> &str {
        self.constraint().unwrap_or("all")
    }

    pub fn is(&self, slug: &str) -> bool {
        self.as_param() == slug
    }
}

/// Inclusive on both bounds. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// An unpriced record only passes the unbounded range.
    pub fn contains(&self, price: Option<i64>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(price) = price else {
            return false;
        };
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Which filter dimensions a browse page exposes.
#[derive(Debug, Clone, Copy)]
pub struct FilterSchema {
    pub categories: &'static [(&'static str, &'static str)],
    pub listing_types: bool,
    pub price_range: bool,
    /// Offers the price sort keys; without it every request sorts newest first.
    pub price_sort: bool,
}

pub const MARKET_FILTERS: FilterSchema = FilterSchema {
    categories: MARKET_CATEGORIES,
    listing_types: false,
    price_range: false,
    price_sort: true,
};

pub const PROPERTY_FILTERS: FilterSchema = FilterSchema {
    categories: PROPERTY_TYPES,
    listing_types: true,
    price_range: true,
    price_sort: true,
};

pub const DISCOVER_FILTERS: FilterSchema = FilterSchema {
    categories: POST_TYPES,
    listing_types: false,
    price_range: false,
    price_sort: false,
};

/// Per-request filter input for one browse page.
///
/// This is the only place the effective region lives: the page-level select and
/// the global selector both resolve into `region`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: Selection,
    pub region: Selection,
    pub listing_type: Selection,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl FilterState {
    /// Builds the state from query parameters.
    ///
    /// `region` in the query wins, including an explicit `all`; without it the
    /// global region (cookie) applies. Unknown slugs and unparsable numbers
    /// degrade to "no constraint".
    pub fn from_params(
        params: &HashMap<String, String>,
        global_region: Option<&str>,
        schema: FilterSchema,
    ) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        let region_raw = get("region").or(global_region);
        let region = Selection::parse_within(region_raw, is_known_region);

        let category = Selection::parse_within(get("category"), |slug| {
            schema.categories.iter().any(|(s, _)| *s == slug)
        });

        let listing_type = if schema.listing_types {
            Selection::parse_within(get("listing_type"), |slug| {
                LISTING_TYPES.iter().any(|(s, _)| *s == slug)
            })
        } else {
            Selection::All
        };

        let price = if schema.price_range {
            PriceRange {
                min: get("min_price").and_then(parse_amount),
                max: get("max_price").and_then(parse_amount),
            }
        } else {
            PriceRange::default()
        };

        FilterState {
            query: get("q").unwrap_or_default().trim().to_string(),
            category,
            region,
            listing_type,
            price,
            sort: if schema.price_sort {
                SortKey::parse(get("sort"))
            } else {
                SortKey::Newest
            },
        }
    }

    /// Non-default fields as query pairs, for "load more" and pagination links.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if !self.query.is_empty() {
            out.push(("q", self.query.clone()));
        }
        if let Some(c) = self.category.constraint() {
            out.push(("category", c.to_string()));
        }
        // Always explicit, so a later cookie change can't shift an open page.
        out.push(("region", self.region.as_param().to_string()));
        if let Some(t) = self.listing_type.constraint() {
            out.push(("listing_type", t.to_string()));
        }
        if let Some(min) = self.price.min {
            out.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.price.max {
            out.push(("max_price", max.to_string()));
        }
        if self.sort != SortKey::Newest {
            out.push(("sort", self.sort.as_str().to_string()));
        }
        out
    }
}

/// Accepts "25000" and "25,000"; anything else is treated as absent.
fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<i64>().ok().filter(|n| *n >= 0)
}

type Predicate<'s, R> = Box<dyn Fn(&R) -> bool + 's>;

/// Builds only the active predicates; an "all" or empty field adds nothing.
fn compose<'s, R: ContentRecord>(state: &'s FilterState) -> Vec<Predicate<'s, R>> {
    let mut predicates: Vec<Predicate<'s, R>> = Vec::new();

    let needle = state.query.trim().to_lowercase();
    if !needle.is_empty() {
        predicates.push(Box::new(move |r: &R| r.search_haystack().contains(&needle)));
    }

    if let Some(category) = state.category.constraint() {
        predicates.push(Box::new(move |r: &R| r.category() == category));
    }

    if let Some(region) = state.region.constraint() {
        predicates.push(Box::new(move |r: &R| r.region().slug == region));
    }

    if let Some(kind) = state.listing_type.constraint() {
        predicates.push(Box::new(move |r: &R| r.listing_type() == Some(kind)));
    }

    if !state.price.is_unbounded() {
        let range = state.price;
        predicates.push(Box::new(move |r: &R| range.contains(r.price())));
    }

    predicates
}

/// Narrows `records` to those matching every active predicate, in source order.
pub fn apply_filters<R>(records: &[R], state: &FilterState) -> Vec<R>
where
    R: ContentRecord + Clone,
{
    let predicates = compose::<R>(state);
    records
        .iter()
        .filter(|r| predicates.iter().all(|p| p(*r)))
        .cloned()
        .collect()
}
