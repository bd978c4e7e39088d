// Standalone building blocks
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod spinner;
pub mod textarea;

// Depends on button
pub mod pagination;

// Depends on button, input, pagination, search_bar, spinner
pub mod data_table;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use spinner::*;
pub use textarea::*;
