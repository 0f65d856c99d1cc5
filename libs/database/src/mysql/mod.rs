//! MySQL connector
//!
//! A single `sqlx::MySqlConnection`, no pool.

mod config;
mod connector;

pub use config::connect_options;
pub use connector::MySqlConnector;

// Re-export sqlx types for convenience
pub use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
