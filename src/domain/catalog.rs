// src/domain/catalog.rs
// Option lists for the page-level filter selects, as (slug, label).

pub const MARKET_CATEGORIES: &[(&str, &str)] = &[
    ("electronics", "Electronics"),
    ("vehicles", "Vehicles"),
    ("furniture", "Furniture"),
    ("clothing", "Clothing & Shoes"),
    ("home-garden", "Home & Garden"),
    ("services", "Services"),
    ("jobs", "Jobs"),
    ("other", "Other"),
];

pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("house", "House"),
    ("apartment", "Apartment"),
    ("land", "Land"),
    ("commercial", "Commercial"),
    ("room", "Room"),
];

pub const LISTING_TYPES: &[(&str, &str)] = &[("sale", "For Sale"), ("rent", "For Rent")];

pub const POST_TYPES: &[(&str, &str)] = &[
    ("news", "News"),
    ("event", "Event"),
    ("alert", "Alert"),
    ("business", "Business"),
    ("community", "Community"),
    ("lost-found", "Lost & Found"),
];

pub fn label_for(options: &[(&'static str, &'static str)], slug: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, label)| *label)
}
