pub mod actions;
pub mod air_quality;
pub mod appointments;
pub mod auth;
pub mod chat;
pub mod reports;
