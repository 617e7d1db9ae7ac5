// src/tests/router_tests/asset_tests.rs
use crate::errors::ServerError;
use crate::fallback::FallbackPolicy;
use crate::router::handle;
use crate::templates::layouts::desktop::HTMX_SRC;
use crate::tests::utils::{body_string, get, header, test_app};

#[test]
fn stylesheet_is_served() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);

    let resp = handle(get("/static/main.css", None), &app)?;
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
    assert!(body_string(resp).contains(".card-grid"));
    Ok(())
}

#[test]
fn unknown_asset_is_not_found() {
    let (app, _dir) = test_app(FallbackPolicy::Never, 12);
    let result = handle(get("/static/../Cargo.toml", None), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn pages_load_assets_that_resolve() -> Result<(), ServerError> {
    let (app, _dir) = test_app(FallbackPolicy::WhenEmpty, 12);

    let body = body_string(handle(get("/market", None), &app)?);
    assert!(body.contains(&format!("src=\"{HTMX_SRC}\"")));
    assert!(HTMX_SRC.starts_with("https://") && HTMX_SRC.contains("htmx.org@2."));

    // Every local asset the page links must be served.
    for local in body.split("href=\"/static/").skip(1) {
        let name = local.split('"').next().unwrap_or_default();
        let resp = handle(get(&format!("/static/{name}"), None), &app)?;
        assert_eq!(resp.status(), 200, "asset {name}");
    }
    Ok(())
}
