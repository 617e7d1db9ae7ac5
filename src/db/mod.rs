pub mod connection;
pub mod records;
pub mod seed;

pub use connection::Database;
pub use records::{load_discover_posts, load_market_listings, load_property_listings};
pub use seed::seed_demo_data;
