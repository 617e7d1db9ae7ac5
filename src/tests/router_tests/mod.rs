mod asset_tests;
mod browse_tests;
mod discover_tests;
mod property_tests;
mod region_tests;
