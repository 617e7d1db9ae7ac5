// src/tests/router_tests/region_tests.rs
use crate::errors::ServerError;
use crate::fallback::FallbackPolicy;
use crate::pipeline::fixtures::market;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, seed_market, test_app};

#[test]
fn region_selector_sets_cookie_and_redirects() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);

    let resp = handle(get("/region?slug=linden&next=/market", None), &app)?;
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/market");
    assert!(header(&resp, "Set-Cookie").starts_with("region=linden;"));
    Ok(())
}

#[test]
fn region_all_clears_cookie() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);

    let resp = handle(get("/region?slug=all&next=/property", None), &app)?;
    assert_eq!(header(&resp, "Location"), "/property");
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));
    Ok(())
}

#[test]
fn unknown_region_is_rejected() {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    let result = handle(get("/region?slug=atlantis", None), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn offsite_next_falls_back_to_home() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);

    let resp = handle(get("/region?slug=berbice&next=//evil.example", None), &app)?;
    assert_eq!(header(&resp, "Location"), "/");
    Ok(())
}

fn seeded_app() -> (crate::router::App, tempfile::TempDir) {
    let (app, dir) = test_app(FallbackPolicy::Never, 12);
    seed_market(
        &app,
        &[
            market("g1", "electronics", "georgetown", Some(1_000), 1, false),
            market("l1", "electronics", "linden", Some(2_000), 2, false),
        ],
    );
    (app, dir)
}

#[test]
fn cookie_region_filters_browse_page() -> Result<(), ServerError> {
    let (app, _dir) = seeded_app();

    let body = body_string(handle(get("/market", Some("region=linden")), &app)?);
    assert!(body.contains("market-l1"));
    assert!(!body.contains("market-g1"));
    Ok(())
}

#[test]
fn query_region_overrides_cookie() -> Result<(), ServerError> {
    let (app, _dir) = seeded_app();

    let body = body_string(handle(get("/market?region=georgetown", Some("region=linden")), &app)?);
    assert!(body.contains("market-g1"));
    assert!(!body.contains("market-l1"));

    let body = body_string(handle(get("/market?region=all", Some("region=linden")), &app)?);
    assert!(body.contains("market-g1"));
    assert!(body.contains("market-l1"));
    Ok(())
}
