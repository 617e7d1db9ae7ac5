// src/db/records.rs
use crate::domain::{
    Condition, DiscoverPost, ListingType, MarketListing, PropertyListing, Provenance, RegionRef,
};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tracing::warn;

fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Region and timestamp shared by every row; `None` (with a warning) when either is unusable.
fn decode_common(
    table: &str,
    id: &str,
    region_slug: &str,
    created_at: &str,
) -> Option<(RegionRef, DateTime<Utc>)> {
    let Some(region) = RegionRef::from_slug(region_slug) else {
        warn!(table, id, region_slug, "skipping row with unknown region");
        return None;
    };
    let Some(created_at) = parse_created_at(created_at) else {
        warn!(table, id, created_at, "skipping row with unparsable created_at");
        return None;
    };
    Some((region, created_at))
}

// ----- Market -----

struct MarketRow {
    id: String,
    title: String,
    description: String,
    category: String,
    condition: String,
    region_slug: String,
    price: Option<i64>,
    created_at: String,
    is_featured: bool,
}

impl MarketRow {
    fn into_listing(self) -> Option<MarketListing> {
        let (region, created_at) =
            decode_common("market_listings", &self.id, &self.region_slug, &self.created_at)?;
        let condition = Condition::parse(&self.condition).unwrap_or_else(|| {
            warn!(
                id = %self.id,
                condition = %self.condition,
                "unknown condition, treating as used"
            );
            Condition::Used
        });

        Some(MarketListing {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            condition,
            region,
            price: self.price,
            created_at,
            is_featured: self.is_featured,
            provenance: Provenance::Remote,
        })
    }
}

pub fn load_market_listings(conn: &Connection) -> Result<Vec<MarketListing>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, title, description, category, condition,
               region_slug, price, created_at, is_featured
        FROM market_listings
        ORDER BY created_at DESC
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(MarketRow {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            condition: row.get(4)?,
            region_slug: row.get(5)?,
            price: row.get(6)?,
            created_at: row.get(7)?,
            is_featured: row.get(8)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        if let Some(listing) = r?.into_listing() {
            out.push(listing);
        }
    }
    Ok(out)
}

pub fn insert_market_listing(conn: &Connection, m: &MarketListing) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO market_listings (
            id, title, description, category, condition,
            region_slug, price, created_at, is_featured
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
        params![
            m.id,
            m.title,
            m.description,
            m.category,
            m.condition.as_str(),
            m.region.slug,
            m.price,
            m.created_at.to_rfc3339(),
            m.is_featured,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert market listing {} failed: {e}", m.id)))?;
    Ok(())
}

// ----- Property -----

struct PropertyRow {
    id: String,
    title: String,
    description: String,
    property_type: String,
    listing_type: String,
    neighborhood: Option<String>,
    bedrooms: Option<i64>,
    region_slug: String,
    price: Option<i64>,
    created_at: String,
    is_featured: bool,
}

impl PropertyRow {
    fn into_listing(self) -> Option<PropertyListing> {
        let (region, created_at) =
            decode_common("property_listings", &self.id, &self.region_slug, &self.created_at)?;
        let Some(listing_type) = ListingType::parse(&self.listing_type) else {
            warn!(
                id = %self.id,
                listing_type = %self.listing_type,
                "skipping row with unknown listing type"
            );
            return None;
        };

        Some(PropertyListing {
            id: self.id,
            title: self.title,
            description: self.description,
            property_type: self.property_type,
            listing_type,
            neighborhood: self.neighborhood,
            bedrooms: self.bedrooms,
            region,
            price: self.price,
            created_at,
            is_featured: self.is_featured,
            provenance: Provenance::Remote,
        })
    }
}

pub fn load_property_listings(conn: &Connection) -> Result<Vec<PropertyListing>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, title, description, property_type, listing_type,
               neighborhood, bedrooms, region_slug, price, created_at, is_featured
        FROM property_listings
        ORDER BY created_at DESC
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(PropertyRow {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            property_type: row.get(3)?,
            listing_type: row.get(4)?,
            neighborhood: row.get(5)?,
            bedrooms: row.get(6)?,
            region_slug: row.get(7)?,
            price: row.get(8)?,
            created_at: row.get(9)?,
            is_featured: row.get(10)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        if let Some(listing) = r?.into_listing() {
            out.push(listing);
        }
    }
    Ok(out)
}

pub fn insert_property_listing(conn: &Connection, p: &PropertyListing) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO property_listings (
            id, title, description, property_type, listing_type,
            neighborhood, bedrooms, region_slug, price, created_at, is_featured
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        "#,
        params![
            p.id,
            p.title,
            p.description,
            p.property_type,
            p.listing_type.as_str(),
            p.neighborhood,
            p.bedrooms,
            p.region.slug,
            p.price,
            p.created_at.to_rfc3339(),
            p.is_featured,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert property listing {} failed: {e}", p.id)))?;
    Ok(())
}

// ----- Discover -----

pub fn load_discover_posts(conn: &Connection) -> Result<Vec<DiscoverPost>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, title, description, post_type, region_slug, created_at
        FROM discover_posts
        ORDER BY created_at DESC
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?, // id
            row.get::<_, String>(1)?, // title
            row.get::<_, String>(2)?, // description
            row.get::<_, String>(3)?, // post_type
            row.get::<_, String>(4)?, // region_slug
            row.get::<_, String>(5)?, // created_at
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (id, title, description, post_type, region_slug, created_at) = r?;
        let Some((region, created_at)) =
            decode_common("discover_posts", &id, &region_slug, &created_at)
        else {
            continue;
        };
        out.push(DiscoverPost {
            id,
            title,
            description,
            post_type,
            region,
            created_at,
            provenance: Provenance::Remote,
        });
    }
    Ok(out)
}

pub fn insert_discover_post(conn: &Connection, d: &DiscoverPost) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO discover_posts (id, title, description, post_type, region_slug, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            d.id,
            d.title,
            d.description,
            d.post_type,
            d.region.slug,
            d.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert discover post {} failed: {e}", d.id)))?;
    Ok(())
}

pub fn count_rows(conn: &Connection, table: RecordTable) -> Result<i64, ServerError> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.name());
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}

#[derive(Debug, Clone, Copy)]
pub enum RecordTable {
    Market,
    Property,
    Discover,
}

impl RecordTable {
    pub fn name(&self) -> &'static str {
        match self {
            RecordTable::Market => "market_listings",
            RecordTable::Property => "property_listings",
            RecordTable::Discover => "discover_posts",
        }
    }
}
