pub mod common;
pub mod config;
pub mod error;
pub mod feature_flags;

// Marketplace domain modules
pub mod experiment;
pub mod recommendation;
pub mod security;
pub mod subscription;
pub mod testimonial;
pub mod user;

pub use common::*;
pub use config::*;
pub use error::*;
pub use feature_flags::*;

pub use experiment::*;
pub use recommendation::*;
pub use security::*;
pub use subscription::*;
pub use testimonial::*;
pub use user::*;
