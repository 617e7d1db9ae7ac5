// src/db/seed.rs
use crate::db::connection::Database;
use crate::db::records::{
    count_rows, insert_discover_post, insert_market_listing, insert_property_listing, RecordTable,
};
use crate::errors::ServerError;
use crate::fallback::demo_data;
use tracing::info;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub market: usize,
    pub property: usize,
    pub discover: usize,
}

/// Copies the bundled demo records into any content table that is still empty.
/// Tables that already hold rows are left alone.
pub fn seed_demo_data(db: &Database) -> Result<SeedReport, ServerError> {
    let demo = demo_data()?;

    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        let mut report = SeedReport::default();

        if count_rows(&tx, RecordTable::Market)? == 0 {
            for m in &demo.market {
                insert_market_listing(&tx, m)?;
            }
            report.market = demo.market.len();
        }
        if count_rows(&tx, RecordTable::Property)? == 0 {
            for p in &demo.property {
                insert_property_listing(&tx, p)?;
            }
            report.property = demo.property.len();
        }
        if count_rows(&tx, RecordTable::Discover)? == 0 {
            for d in &demo.discover {
                insert_discover_post(&tx, d)?;
            }
            report.discover = demo.discover.len();
        }

        tx.commit()?;
        info!(
            market = report.market,
            property = report.property,
            discover = report.discover,
            "seeded demo records"
        );
        Ok(report)
    })
}
