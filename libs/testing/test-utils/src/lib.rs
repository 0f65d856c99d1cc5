//! Container fixtures for connector integration tests
//!
//! Each fixture starts a throwaway server and exposes where to reach it:
//! - `TestMongo`: MongoDB (feature: "mongodb")
//! - `TestMySql`: MySQL (feature: "mysql")
//! - `TestPostgres`: PostgreSQL, standing in for Redshift (feature: "postgres")
//!
//! Containers are stopped and removed when the fixture is dropped. Tests that use
//! them need Docker and are marked `#[ignore]`.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mysql"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::TestMySql;
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_mysql_test() {
//!     let mysql = TestMySql::new().await;
//!     let endpoint = mysql.endpoint();
//!     // build a client from endpoint.host / endpoint.port ...
//! }
//! ```

// Conditionally compile fixtures based on features
#[cfg(feature = "mongodb")]
mod mongodb;

#[cfg(feature = "mysql")]
mod mysql;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "mongodb")]
pub use mongodb::TestMongo;

#[cfg(feature = "mysql")]
pub use mysql::TestMySql;

#[cfg(feature = "postgres")]
pub use postgres::TestPostgres;

/// Where a started container listens and how to log in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl ServiceEndpoint {
    pub(crate) fn local(port: u16, database: &str, username: &str, password: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
            database: database.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
