pub mod config;
pub mod message;
pub mod routes;
pub mod services;
