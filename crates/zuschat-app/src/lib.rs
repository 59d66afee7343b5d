//! zuschat terminal client
//!
//! Wires configuration, storage, the HTTP backend and the chat controller
//! together behind the `zuschat` binary.

pub mod app;
pub mod cli;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::ClientConfig;
