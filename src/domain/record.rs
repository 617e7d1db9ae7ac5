// src/domain/record.rs

use crate::domain::region::region_name;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A region reference carried by every record: slug for filtering, name for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRef {
    pub slug: String,
    pub name: String,
}

impl RegionRef {
    /// Resolves a slug against the region catalogue. Unknown slugs yield `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        region_name(slug).map(|name| RegionRef {
            slug: slug.to_string(),
            name: name.to_string(),
        })
    }
}

/// Where a record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Provenance {
    #[default]
    Remote,
    Fallback,
}

/// The surface the browse pipeline needs from a discover post, market listing
/// or property listing.
///
/// Records are read-only once loaded; filtering and sorting always build new
/// collections.
pub trait ContentRecord {
    /// Whether this kind takes part in the "featured first" partition.
    const FEATURABLE: bool = false;

    fn id(&self) -> &str;

    /// Text fields searched by the free-text filter, in order.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Categorical slug (market category, property type, post type).
    fn category(&self) -> &str;

    fn region(&self) -> &RegionRef;

    fn price(&self) -> Option<i64> {
        None
    }

    fn created_at(&self) -> DateTime<Utc>;

    fn is_featured(&self) -> bool {
        false
    }

    /// Secondary type slug (`sale` / `rent`) for kinds that have one.
    fn listing_type(&self) -> Option<&str> {
        None
    }

    fn provenance(&self) -> Provenance;

    fn set_provenance(&mut self, provenance: Provenance);

    /// Lowercased haystack for the text predicate.
    fn search_haystack(&self) -> String {
        self.searchable_fields().join(" ").to_lowercase()
    }
}
