//! Connectors for the data stores a batch job talks to: MongoDB, MySQL and Redshift
//!
//! Every backend follows the same lifecycle through the [`Connector`] trait:
//! construct from a [`ConnectionConfig`], `connect`, use the handle, `close`.
//!
//! # Features
//!
//! - `mongodb` (default) - document store, via the official driver
//! - `mysql` (default) - relational SQL, a single sqlx connection
//! - `redshift` (default) - warehouse over the PostgreSQL protocol, via SeaORM
//!
//! # Examples
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::{Connector, mongodb::MongoConnector};
//!
//! let mut mongo = MongoConnector::from_env()?;
//! mongo.connect().await?;
//! let users = mongo.database().unwrap().collection::<Document>("users");
//! mongo.close().await;
//! ```
//!
//! ## MySQL
//!
//! ```ignore
//! use database::{Connector, mysql::MySqlConnector};
//!
//! let mut mysql = MySqlConnector::from_env()?;
//! let conn = mysql.connect().await?;
//! sqlx::query("SELECT 1").execute(&mut *conn).await?;
//! mysql.close().await;
//! ```
//!
//! ## Redshift
//!
//! ```ignore
//! use database::{BackendKind, ConnectionConfig, Connector, redshift::RedshiftConnector};
//!
//! let config = ConnectionConfig::from_env(BackendKind::Warehouse)?.with_connect_timeout(30);
//! let mut redshift = RedshiftConnector::new(config);
//! redshift.connect().await?;
//! redshift.close().await;
//! ```

// Always available modules
pub mod common;
pub mod connector;

// Backend modules (conditional based on features)
#[cfg(feature = "mongodb")]
pub mod mongodb;

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "redshift")]
pub mod redshift;

// Re-exports for convenience
pub use common::{BackendKind, ConnectionConfig, DatabaseError, DatabaseResult, HealthStatus};
pub use connector::Connector;
