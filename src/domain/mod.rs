pub mod catalog;
pub mod discover;
pub mod market;
pub mod property;
pub mod record;
pub mod region;

pub use discover::DiscoverPost;
pub use market::{Condition, MarketListing};
pub use property::{ListingType, PropertyListing};
pub use record::{ContentRecord, Provenance, RegionRef};
