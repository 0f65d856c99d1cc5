//! MongoDB connector
//!
//! Provides the document-store `Connector` and MongoDB-specific helpers.

mod config;
mod connector;
mod health;

pub use config::client_options;
pub use connector::MongoConnector;
pub use health::{check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
