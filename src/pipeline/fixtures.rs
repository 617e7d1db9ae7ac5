// Record builders shared by the pipeline tests.

use crate::domain::{
    Condition, ContentRecord, DiscoverPost, ListingType, MarketListing, PropertyListing,
    Provenance, RegionRef,
};
use chrono::{DateTime, TimeZone, Utc};

/// `t` is an hour offset from a fixed epoch, so larger means more recent.
pub fn at(t: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + t * 3600, 0).unwrap()
}

pub fn region(slug: &str) -> RegionRef {
    RegionRef::from_slug(slug).unwrap_or_else(|| panic!("unknown region {slug}"))
}

pub fn market(
    id: &str,
    category: &str,
    region_slug: &str,
    price: Option<i64>,
    t: i64,
    featured: bool,
) -> MarketListing {
    MarketListing {
        id: id.to_string(),
        title: format!("Listing {id}"),
        description: String::new(),
        category: category.to_string(),
        condition: Condition::Used,
        region: region(region_slug),
        price,
        created_at: at(t),
        is_featured: featured,
        provenance: Provenance::Remote,
    }
}

pub fn property(
    id: &str,
    listing_type: ListingType,
    neighborhood: Option<&str>,
    price: Option<i64>,
    t: i64,
    featured: bool,
) -> PropertyListing {
    PropertyListing {
        id: id.to_string(),
        title: format!("Property {id}"),
        description: String::new(),
        property_type: "house".to_string(),
        listing_type,
        neighborhood: neighborhood.map(str::to_string),
        bedrooms: Some(3),
        region: region("georgetown"),
        price,
        created_at: at(t),
        is_featured: featured,
        provenance: Provenance::Remote,
    }
}

pub fn post(id: &str, post_type: &str, region_slug: &str, t: i64) -> DiscoverPost {
    DiscoverPost {
        id: id.to_string(),
        title: format!("Post {id}"),
        description: String::new(),
        post_type: post_type.to_string(),
        region: region(region_slug),
        created_at: at(t),
        provenance: Provenance::Remote,
    }
}

pub fn ids<R: ContentRecord>(records: &[R]) -> Vec<&str> {
    records.iter().map(|r| r.id()).collect()
}
