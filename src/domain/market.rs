// src/domain/market.rs

use crate::domain::record::{ContentRecord, Provenance, RegionRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Used,
    NotApplicable,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::NotApplicable => "not_applicable",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "new" => Some(Condition::New),
            "used" => Some(Condition::Used),
            "not_applicable" => Some(Condition::NotApplicable),
            _ => None,
        }
    }
}

/// A marketplace listing. `price` is `None` for contact-for-price and service listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: Condition,
    pub region: RegionRef,
    pub price: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl ContentRecord for MarketListing {
    const FEATURABLE: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn region(&self) -> &RegionRef {
        &self.region
    }

    fn price(&self) -> Option<i64> {
        self.price
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn provenance(&self) -> Provenance {
        self.provenance
    }

    fn set_provenance(&mut self, provenance: Provenance) {
        self.provenance = provenance;
    }
}
