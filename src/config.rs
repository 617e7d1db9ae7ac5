// src/config.rs
use crate::errors::ServerError;
use crate::fallback::FallbackPolicy;
use crate::pipeline::reveal::{DEFAULT_LOOKAHEAD, DEFAULT_PAGE_SIZE};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub db_path: String,
    pub schema_path: String,
    /// Number of cards revealed per window on the browse pages.
    pub page_size: usize,
    /// How far below the viewport (px) the scroll sentinel starts loading.
    pub lookahead_px: u32,
    pub fallback_policy: FallbackPolicy,
    /// Copy the demo records into empty tables on startup.
    pub seed_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            db_path: "yuhplace.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            lookahead_px: DEFAULT_LOOKAHEAD,
            fallback_policy: FallbackPolicy::WhenEmpty,
            seed_demo: false,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `YUHPLACE_*` variables (a `.env` file is read first if present).
    pub fn from_env() -> Result<Self, ServerError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = parse_var(&lookup, "YUHPLACE_BIND_ADDR")? {
            cfg.bind_addr = addr;
        }
        if let Some(n) = parse_var(&lookup, "YUHPLACE_MAX_WORKERS")? {
            cfg.max_workers = n;
        }
        if let Some(path) = lookup("YUHPLACE_DB_PATH") {
            cfg.db_path = path;
        }
        if let Some(path) = lookup("YUHPLACE_SCHEMA_PATH") {
            cfg.schema_path = path;
        }
        if let Some(n) = parse_var(&lookup, "YUHPLACE_PAGE_SIZE")? {
            cfg.page_size = n;
        }
        if let Some(px) = parse_var(&lookup, "YUHPLACE_LOOKAHEAD_PX")? {
            cfg.lookahead_px = px;
        }
        if let Some(policy) = parse_var(&lookup, "YUHPLACE_FALLBACK")? {
            cfg.fallback_policy = policy;
        }
        if let Some(seed) = parse_var(&lookup, "YUHPLACE_SEED_DEMO")? {
            cfg.seed_demo = seed;
        }

        if cfg.page_size == 0 {
            return Err(ServerError::Config(
                "YUHPLACE_PAGE_SIZE must be at least 1".into(),
            ));
        }
        if cfg.max_workers == 0 {
            return Err(ServerError::Config(
                "YUHPLACE_MAX_WORKERS must be at least 1".into(),
            ));
        }

        Ok(cfg)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ServerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ServerError::Config(format!("{key}={raw:?}: {e}"))),
    }
}
