// src/domain/property.rs

use crate::domain::record::{ContentRecord, Provenance, RegionRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sale" => Some(ListingType::Sale),
            "rent" => Some(ListingType::Rent),
            _ => None,
        }
    }
}

/// A house, apartment, land or commercial listing, for sale or rent.
///
/// `neighborhood` is free text entered by the poster ("Bel Air Park", "Section K")
/// and is searched along with the title and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub listing_type: ListingType,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<i64>,
    pub region: RegionRef,
    pub price: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl ContentRecord for PropertyListing {
    const FEATURABLE: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        if let Some(n) = self.neighborhood.as_deref() {
            fields.push(n);
        }
        fields
    }

    fn category(&self) -> &str {
        &self.property_type
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

    fn listing_type(&self) -> Option<&str> {
        Some(self.listing_type.as_str())
    }

    fn provenance(&self) -> Provenance {
        self.provenance
    }

    fn set_provenance(&mut self, provenance: Provenance) {
        self.provenance = provenance;
    }
}
