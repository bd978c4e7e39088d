pub mod experiments;
pub mod suggestions;
