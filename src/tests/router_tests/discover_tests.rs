// src/tests/router_tests/discover_tests.rs
use crate::errors::ServerError;
use crate::fallback::FallbackPolicy;
use crate::pipeline::fixtures::post;
use crate::router::handle;
use crate::tests::utils::{body_string, get, position, seed_posts, test_app};

#[test]
fn more_fragment_pages_through_posts() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 2);
    let posts: Vec<_> = (0..5)
        .map(|i| post(&format!("d{i}"), "news", "linden", i))
        .collect();
    seed_posts(&app, &posts);

    // Newest first: d4 d3 | d2 d1 | d0.
    let more = body_string(handle(get("/discover/more?region=all&shown=2", None), &app)?);
    assert!(more.contains("post-d2"));
    assert!(more.contains("post-d1"));
    assert!(!more.contains("post-d3"));
    assert!(!more.contains("post-d0"));
    assert!(more.contains("Showing 4 of 5"));
    assert!(more.contains("hx-get=\"/discover/more?region=all&amp;shown=4\""));

    let last = body_string(handle(get("/discover/more?region=all&shown=4", None), &app)?);
    assert!(last.contains("post-d0"));
    assert!(!last.contains("scroll-sentinel"));
    Ok(())
}

#[test]
fn price_sort_does_not_apply_to_posts() -> Result<(), ServerError> {
    // Demo posts are appended after the local one but are more recent.
    let (app, _dir) = test_app(FallbackPolicy::Always, 12);
    seed_posts(&app, &[post("local", "news", "georgetown", 1)]);

    let body = body_string(handle(get("/discover?sort=price-low", None), &app)?);
    assert!(position(&body, "post-demo-d-01") < position(&body, "post-local"));
    assert!(!body.contains("name=\"sort\""));
    Ok(())
}
