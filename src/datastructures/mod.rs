pub mod account;
pub mod client;
pub mod config;
pub mod position;
