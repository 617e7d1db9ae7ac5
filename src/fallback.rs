// src/fallback.rs

use crate::domain::{ContentRecord, DiscoverPost, MarketListing, PropertyListing, Provenance};
use crate::errors::ServerError;
use serde::Deserialize;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

const DEMO_JSON: &str = include_str!("../data/fallback.json");

/// When the static demo records join the browse collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    Never,
    WhenEmpty,
    Always,
}

impl FallbackPolicy {
    pub fn applies(&self, remote_is_empty: bool) -> bool {
        match self {
            FallbackPolicy::Never => false,
            FallbackPolicy::WhenEmpty => remote_is_empty,
            FallbackPolicy::Always => true,
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(FallbackPolicy::Never),
            "when-empty" | "when_empty" => Ok(FallbackPolicy::WhenEmpty),
            "always" => Ok(FallbackPolicy::Always),
            other => Err(format!("unknown fallback policy '{other}'")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoData {
    pub market: Vec<MarketListing>,
    pub property: Vec<PropertyListing>,
    pub discover: Vec<DiscoverPost>,
}

/// Parses the bundled demo records, tagged as `Provenance::Fallback`.
pub fn demo_data() -> Result<DemoData, ServerError> {
    let mut data: DemoData = serde_json::from_str(DEMO_JSON)
        .map_err(|e| ServerError::Config(format!("bundled demo data is invalid: {e}")))?;

    tag(&mut data.market);
    tag(&mut data.property);
    tag(&mut data.discover);
    Ok(data)
}

fn tag<R: ContentRecord>(records: &mut [R]) {
    for r in records {
        r.set_provenance(Provenance::Fallback);
    }
}

/// Remote records first, then fallback records the policy allows. Fallback ids
/// already present remotely are dropped so ids stay unique.
pub fn merge_sources<R: ContentRecord>(
    remote: Vec<R>,
    fallback: Vec<R>,
    policy: FallbackPolicy,
) -> Vec<R> {
    if !policy.applies(remote.is_empty()) {
        return remote;
    }

    let seen: HashSet<String> = remote.iter().map(|r| r.id().to_string()).collect();
    let remote_len = remote.len();
    let mut merged = remote;
    merged.extend(fallback.into_iter().filter(|r| !seen.contains(r.id())));

    debug!(
        remote = remote_len,
        fallback = merged.len() - remote_len,
        "merged fallback records"
    );
    merged
}
