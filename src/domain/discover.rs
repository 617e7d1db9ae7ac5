// src/domain/discover.rs

use crate::domain::record::{ContentRecord, Provenance, RegionRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community update on the Discover feed. Posts carry no price and are never featured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverPost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub post_type: String,
    pub region: RegionRef,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl ContentRecord for DiscoverPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category(&self) -> &str {
        &self.post_type
    }

    fn region(&self) -> &RegionRef {
        &self.region
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn provenance(&self) -> Provenance {
        self.provenance
    }

    fn set_provenance(&mut self, provenance: Provenance) {
        self.provenance = provenance;
    }
}
