// src/tests/router_tests/browse_tests.rs
use crate::errors::ServerError;
use crate::fallback::FallbackPolicy;
use crate::pipeline::fixtures::market;
use crate::router::handle;
use crate::tests::utils::{body_string, get, position, seed_market, test_app};

#[test]
fn market_page_filters_by_query_region() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    seed_market(
        &app,
        &[
            market("g1", "electronics", "georgetown", Some(50_000), 1, false),
            market("l1", "electronics", "linden", Some(20_000), 2, false),
            market("g2", "furniture", "georgetown", None, 3, false),
        ],
    );

    let resp = handle(get("/market?region=georgetown", None), &app)?;
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("market-g1"));
    assert!(body.contains("market-g2"));
    assert!(!body.contains("market-l1"));
    assert!(body.contains("Showing 2 of 2"));
    Ok(())
}

#[test]
fn empty_store_shows_demo_records_when_empty() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::WhenEmpty, 12);

    let body = body_string(handle(get("/market", None), &app)?);
    assert!(body.contains("market-demo-m-01"));
    assert!(body.contains("Sample"));
    Ok(())
}

#[test]
fn remote_records_suppress_demo_records_when_empty_policy() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::WhenEmpty, 12);
    seed_market(&app, &[market("g1", "electronics", "georgetown", Some(1_000), 1, false)]);

    let body = body_string(handle(get("/market", None), &app)?);
    assert!(body.contains("market-g1"));
    assert!(!body.contains("demo-m-"));
    Ok(())
}

#[test]
fn never_policy_renders_empty_state() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);

    let body = body_string(handle(get("/discover", None), &app)?);
    assert!(body.contains("No results"));
    assert!(body.contains("Nothing matches these filters yet."));
    assert!(!body.contains("scroll-sentinel"));
    Ok(())
}

#[test]
fn first_window_then_more_fragment() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    let listings: Vec<_> = (0..15)
        .map(|i| {
            let id = format!("m{i:02}");
            market(&id, "electronics", "georgetown", Some(1_000 + i), i, false)
        })
        .collect();
    seed_market(&app, &listings);

    // Newest first: m14..m03 on the page, m02..m00 left for the sentinel.
    let page = body_string(handle(get("/market", None), &app)?);
    assert!(page.contains("Showing 12 of 15"));
    assert!(page.contains("market-m14"));
    assert!(page.contains("market-m03"));
    assert!(!page.contains("market-m02"));
    assert!(page.contains("scroll-sentinel"));
    assert!(page.contains("hx-get=\"/market/more?region=all&amp;shown=12\""));

    let more = body_string(handle(get("/market/more?region=all&shown=12", None), &app)?);
    assert!(more.contains("market-m02"));
    assert!(more.contains("market-m00"));
    assert!(!more.contains("market-m03"));
    assert!(more.contains("hx-swap-oob=\"true\""));
    assert!(more.contains("Showing 15 of 15"));
    assert!(!more.contains("scroll-sentinel"));
    Ok(())
}

#[test]
fn more_fragment_clamps_out_of_range_offset() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    seed_market(&app, &[market("g1", "electronics", "georgetown", Some(1_000), 1, false)]);

    let more = body_string(handle(get("/market/more?shown=99", None), &app)?);
    assert!(!more.contains("market-g1"));
    assert!(more.contains("Showing 1 of 1"));
    Ok(())
}

#[test]
fn price_sort_keeps_featured_first() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    seed_market(
        &app,
        &[
            market("cheap", "electronics", "georgetown", Some(100), 1, false),
            market("pricey", "electronics", "georgetown", Some(9_000), 2, true),
            market("mid", "electronics", "georgetown", Some(500), 3, false),
        ],
    );

    let body = body_string(handle(get("/market?sort=price-low", None), &app)?);
    assert!(position(&body, "market-pricey") < position(&body, "market-cheap"));
    assert!(position(&body, "market-cheap") < position(&body, "market-mid"));
    Ok(())
}

#[test]
fn unknown_path_is_not_found() {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    let result = handle(get("/nowhere", None), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn more_fragment_requires_shown() {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    seed_market(&app, &[market("g1", "electronics", "georgetown", Some(1_000), 1, false)]);

    let result = handle(get("/market/more?region=all", None), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let result = handle(get("/market/more?shown=twelve", None), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
