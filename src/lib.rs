pub mod config;
pub mod filter;
pub mod models;
pub mod services;
