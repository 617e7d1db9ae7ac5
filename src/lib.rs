//! YuhPlace browse service: content records, the filter/sort/reveal
//! pipeline, and the astra + maud web surface built on it.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod fallback;
pub mod pipeline;
pub mod responses;
pub mod router;
pub mod section;
pub mod templates;

#[cfg(test)]
mod tests;
