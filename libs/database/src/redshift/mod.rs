//! Redshift warehouse connector
//!
//! Redshift speaks the PostgreSQL wire protocol, so the handle is a SeaORM
//! `DatabaseConnection` over the Postgres driver.

mod config;
mod connector;
mod health;

pub use config::connect_options;
pub use connector::RedshiftConnector;
pub use health::{check_health, check_health_detailed, check_health_with_query};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
