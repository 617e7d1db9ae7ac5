use crate::config::AppConfig;
use crate::db::{load_discover_posts, load_market_listings, load_property_listings, Database};
use crate::domain::region::is_known_region;
use crate::errors::ServerError;
use crate::fallback::{demo_data, merge_sources, DemoData};
use crate::pipeline::{first_window, next_window, FilterState, Selection};
use crate::responses::{html_response, redirect_response, static_asset, ResultResp};
use crate::section::Section;
use crate::templates::components::RenderCard;
use crate::templates::pages::{self, BrowseVm};
use astra::Request;
use std::collections::HashMap;
use tracing::debug;
use url::form_urlencoded;

pub const REGION_COOKIE: &str = "region";

/// Everything a request handler needs; shared read-only across workers.
#[derive(Debug, Clone)]
pub struct App {
    pub db: Database,
    pub config: AppConfig,
}

impl App {
    pub fn new(db: Database, config: AppConfig) -> Self {
        Self { db, config }
    }
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page(&global_region(&req))),

        ("GET", "/discover") => browse(&req, app, Section::Discover, false),
        ("GET", "/discover/more") => browse(&req, app, Section::Discover, true),
        ("GET", "/market") => browse(&req, app, Section::Market, false),
        ("GET", "/market/more") => browse(&req, app, Section::Market, true),
        ("GET", "/property") => browse(&req, app, Section::Property, false),
        ("GET", "/property/more") => browse(&req, app, Section::Property, true),

        ("GET", "/region") => set_global_region(&req),

        ("GET", p) if p.starts_with("/static/") => static_asset(&p["/static/".len()..]),

        _ => Err(ServerError::NotFound),
    }
}

fn browse(req: &Request, app: &App, section: Section, fragment: bool) -> ResultResp {
    let policy = app.config.fallback_policy;

    match section {
        Section::Discover => {
            let remote = app.db.with_conn(|conn| load_discover_posts(conn))?;
            let fallback = fallback_for(policy.applies(remote.is_empty()), |d| d.discover)?;
            render(req, app, section, fragment, merge_sources(remote, fallback, policy))
        }
        Section::Market => {
            let remote = app.db.with_conn(|conn| load_market_listings(conn))?;
            let fallback = fallback_for(policy.applies(remote.is_empty()), |d| d.market)?;
            render(req, app, section, fragment, merge_sources(remote, fallback, policy))
        }
        Section::Property => {
            let remote = app.db.with_conn(|conn| load_property_listings(conn))?;
            let fallback = fallback_for(policy.applies(remote.is_empty()), |d| d.property)?;
            render(req, app, section, fragment, merge_sources(remote, fallback, policy))
        }
    }
}

/// Demo records of one kind, parsed only when they will be used.
fn fallback_for<R, F>(needed: bool, pick: F) -> Result<Vec<R>, ServerError>
where
    F: FnOnce(DemoData) -> Vec<R>,
{
    if !needed {
        return Ok(Vec::new());
    }
    Ok(pick(demo_data()?))
}

fn render<R>(
    req: &Request,
    app: &App,
    section: Section,
    fragment: bool,
    records: Vec<R>,
) -> ResultResp
where
    R: RenderCard + Clone,
{
    let params = parse_query(req);
    let cookie_region = cookie_value(req, REGION_COOKIE);
    let state = FilterState::from_params(&params, cookie_region.as_deref(), section.schema());
    let page_size = app.config.page_size;

    let view = if fragment {
        // A fragment without a count can't tell which window comes next.
        let shown = params
            .get("shown")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .ok_or_else(|| ServerError::BadRequest("missing or invalid 'shown'".into()))?;
        next_window(&records, &state, page_size, shown)
    } else {
        first_window(&records, &state, page_size)
    };

    debug!(
        section = section.title(),
        fragment,
        source = records.len(),
        total = view.total,
        shown = view.shown,
        "browse"
    );

    let global = global_region(req);
    let vm = BrowseVm {
        section,
        state: &state,
        view: &view,
        global_region: &global,
        lookahead_px: app.config.lookahead_px,
    };

    if fragment {
        html_response(pages::more_fragment(&vm))
    } else {
        html_response(pages::browse_page(&vm))
    }
}

/// `GET /region?slug=..&next=..`: stores the global region and goes back.
fn set_global_region(req: &Request) -> ResultResp {
    let params = parse_query(req);
    let slug = params.get("slug").map(|s| s.trim()).unwrap_or("all");

    let cookie = if slug == "all" {
        format!("{REGION_COOKIE}=; Path=/; Max-Age=0; SameSite=Lax")
    } else if is_known_region(slug) {
        format!("{REGION_COOKIE}={slug}; Path=/; Max-Age=31536000; SameSite=Lax")
    } else {
        return Err(ServerError::BadRequest(format!("unknown region '{slug}'")));
    };

    let next = params
        .get("next")
        .map(String::as_str)
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or("/");

    redirect_response(next, Some(&cookie))
}

fn global_region(req: &Request) -> Selection {
    Selection::parse_within(cookie_value(req, REGION_COOKIE).as_deref(), is_known_region)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
}
