pub mod dtos;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
