use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::db::records::{insert_discover_post, insert_market_listing, insert_property_listing};
use crate::domain::{DiscoverPost, MarketListing, PropertyListing};
use crate::fallback::FallbackPolicy;
use crate::router::App;
use astra::{Body, Request, Response};
use std::io::Read;
use tempfile::TempDir;

/// App backed by a fresh database in its own temp dir; keep the dir alive
/// for as long as the app is used.
pub fn test_app(policy: FallbackPolicy, page_size: usize) -> (App, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("test.sqlite3");
    let db = Database::new(db_path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    let config = AppConfig {
        db_path: db.path().to_string(),
        page_size,
        fallback_policy: policy,
        ..AppConfig::default()
    };

    (App::new(db, config), dir)
}

pub fn seed_market(app: &App, listings: &[MarketListing]) {
    app.db
        .with_conn(|conn| {
            for listing in listings {
                insert_market_listing(conn, listing)?;
            }
            Ok(())
        })
        .unwrap_or_else(|e| panic!("seeding market listings failed: {e}"));
}

pub fn seed_property(app: &App, listings: &[PropertyListing]) {
    app.db
        .with_conn(|conn| {
            for listing in listings {
                insert_property_listing(conn, listing)?;
            }
            Ok(())
        })
        .unwrap_or_else(|e| panic!("seeding property listings failed: {e}"));
}

pub fn seed_posts(app: &App, posts: &[DiscoverPost]) {
    app.db
        .with_conn(|conn| {
            for post in posts {
                insert_discover_post(conn, post)?;
            }
            Ok(())
        })
        .unwrap_or_else(|e| panic!("seeding discover posts failed: {e}"));
}

/// Byte offset of a card's id in `body`, for ordering assertions.
pub fn position(body: &str, card_id: &str) -> usize {
    body.find(&format!("id=\"{card_id}\""))
        .unwrap_or_else(|| panic!("card {card_id} not rendered"))
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    builder.body(Body::empty()).expect("valid request")
}

pub fn body_string(resp: Response) -> String {
    let mut s = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut s)
        .expect("readable body");
    s
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
