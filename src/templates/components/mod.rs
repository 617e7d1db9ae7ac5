pub mod card;
pub mod error;
pub mod filter_form;
pub mod sentinel;

pub use card::RenderCard;
pub use error::html_error_response;
pub use filter_form::filter_form;
pub use sentinel::{result_count, sentinel};
