//! Common types shared across all connector implementations

pub mod config;
pub mod error;
pub mod health;

pub use config::{BackendKind, ConnectionConfig};
pub use error::{BoxError, DatabaseError, DatabaseResult};
pub use health::HealthStatus;
