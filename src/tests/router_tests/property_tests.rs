// src/tests/router_tests/property_tests.rs
use crate::domain::ListingType;
use crate::errors::ServerError;
use crate::fallback::FallbackPolicy;
use crate::pipeline::fixtures::property;
use crate::router::{handle, App};
use crate::tests::utils::{body_string, get, position, seed_property, test_app};
use tempfile::TempDir;

fn seeded_app() -> (App, TempDir) {
    let (app, dir) = test_app(FallbackPolicy::Never, 12);
    seed_property(
        &app,
        &[
            property("p1", ListingType::Sale, Some("Bel Air"), Some(30_000_000), 1, false),
            property("p2", ListingType::Rent, Some("Kitty"), Some(150_000), 2, false),
            property("p3", ListingType::Sale, Some("Bel Air Park"), Some(80_000_000), 3, true),
            property("p4", ListingType::Sale, None, None, 4, false),
        ],
    );
    (app, dir)
}

#[test]
fn price_range_and_listing_type_narrow_results() -> Result<(), ServerError> {
    let (app, _dir) = seeded_app();

    let uri = "/property?listing_type=sale&min_price=20%2C000%2C000&max_price=50000000";
    let body = body_string(handle(get(uri, None), &app)?);
    assert!(body.contains("property-p1"));
    assert!(!body.contains("property-p2"));
    assert!(!body.contains("property-p3"));
    // Unpriced listings never satisfy a bounded range.
    assert!(!body.contains("property-p4"));
    assert!(body.contains("Showing 1 of 1"));
    Ok(())
}

#[test]
fn bounds_are_inclusive() -> Result<(), ServerError> {
    let (app, _dir) = seeded_app();

    let uri = "/property?min_price=150000&max_price=30000000";
    let body = body_string(handle(get(uri, None), &app)?);
    assert!(body.contains("property-p1"));
    assert!(body.contains("property-p2"));
    assert!(!body.contains("property-p3"));
    Ok(())
}

#[test]
fn rentals_show_monthly_price() -> Result<(), ServerError> {
    let (app, _dir) = seeded_app();

    let body = body_string(handle(get("/property?listing_type=rent", None), &app)?);
    assert!(body.contains("property-p2"));
    assert!(!body.contains("property-p1"));
    assert!(body.contains("$150,000 GYD"));
    assert!(body.contains(" / month"));
    Ok(())
}

#[test]
fn search_matches_neighborhood_and_featured_leads() -> Result<(), ServerError> {
    let (app, _dir) = seeded_app();

    let body = body_string(handle(get("/property?q=bel+air&sort=price-low", None), &app)?);
    assert!(!body.contains("property-p2"));
    assert!(!body.contains("property-p4"));
    // p3 is dearer but featured.
    assert!(position(&body, "property-p3") < position(&body, "property-p1"));
    Ok(())
}
