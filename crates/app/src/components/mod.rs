pub mod error_banner;
pub mod list_query;
pub mod status_badge;

pub use error_banner::ErrorBanner;
pub use list_query::use_list_query;
pub use status_badge::*;
