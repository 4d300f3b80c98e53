//! Public tracker for an Alpaca paper trading account.
//!
//! `settings` loads the key pair, [`alpaca::AlpacaClient`] fetches the account
//! and its positions, [`view::build`] derives display numbers, and `render`
//! turns the outcome into an HTML page served by `server`.

pub mod alpaca;
pub mod dashboard;
pub mod datastructures;
pub mod error;
pub mod render;
pub mod server;
pub mod settings;
pub mod view;
