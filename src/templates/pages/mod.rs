pub mod browse;
pub mod home;

pub use browse::{browse_page, more_fragment, BrowseVm};
pub use home::home_page;
