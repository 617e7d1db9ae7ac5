// src/domain/region.rs

/// Regions offered by the global and page-level selectors, as (slug, display name).
pub const REGIONS: &[(&str, &str)] = &[
    ("georgetown", "Georgetown"),
    ("east-coast-demerara", "East Coast Demerara"),
    ("east-bank-demerara", "East Bank Demerara"),
    ("west-coast-demerara", "West Coast Demerara"),
    ("west-bank-demerara", "West Bank Demerara"),
    ("linden", "Linden"),
    ("berbice", "Berbice"),
    ("essequibo", "Essequibo"),
    ("bartica", "Bartica"),
    ("lethem", "Lethem"),
];

pub fn region_name(slug: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, name)| *name)
}

pub fn is_known_region(slug: &str) -> bool {
    region_name(slug).is_some()
}
