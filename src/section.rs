// src/section.rs

use crate::pipeline::filter::{FilterSchema, DISCOVER_FILTERS, MARKET_FILTERS, PROPERTY_FILTERS};
use crate::pipeline::FilterState;
use url::form_urlencoded;

/// The three browse pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Discover,
    Market,
    Property,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Discover, Section::Market, Section::Property];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Discover => "Discover",
            Section::Market => "Market",
            Section::Property => "Property",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Section::Discover => "/discover",
            Section::Market => "/market",
            Section::Property => "/property",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Section::Discover => "News, events and alerts from around the community.",
            Section::Market => "Buy and sell anything, from phones to fishing boats.",
            Section::Property => "Houses, apartments and land for sale or rent.",
        }
    }

    pub fn category_label(&self) -> &'static str {
        match self {
            Section::Discover => "Type",
            Section::Market => "Category",
            Section::Property => "Property type",
        }
    }

    pub fn schema(&self) -> FilterSchema {
        match self {
            Section::Discover => DISCOVER_FILTERS,
            Section::Market => MARKET_FILTERS,
            Section::Property => PROPERTY_FILTERS,
        }
    }

    /// Discover is chronological only.
    pub fn sorts_by_price(&self) -> bool {
        self.schema().price_sort
    }

    /// URL of the next window after `shown` cards under `state`.
    pub fn more_url(&self, state: &FilterState, shown: usize) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in state.to_params() {
            query.append_pair(key, &value);
        }
        query.append_pair("shown", &shown.to_string());
        format!("{}/more?{}", self.path(), query.finish())
    }
}
