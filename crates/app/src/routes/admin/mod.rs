pub mod moderation;
pub mod security;
pub mod subscriptions;
pub mod users;
