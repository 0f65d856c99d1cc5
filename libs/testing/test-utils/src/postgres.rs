//! PostgreSQL test infrastructure
//!
//! Redshift speaks the PostgreSQL wire protocol, so warehouse connector tests run
//! against a stock Postgres server.

use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use crate::ServiceEndpoint;

/// PostgreSQL container (`postgres`/`postgres`, database `postgres`)
pub struct TestPostgres {
    #[allow(dead_code)]
    container: ContainerAsync<Postgres>,
    endpoint: ServiceEndpoint,
}

impl TestPostgres {
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("18-alpine")
            .start()
            .await
            .expect("Failed to start Postgres container");

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get host port");

        tracing::info!(port = host_port, "Test Postgres ready (Postgres 18)");

        Self {
            container,
            endpoint: ServiceEndpoint::local(host_port, "postgres", "postgres", "postgres"),
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }
}

impl Drop for TestPostgres {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test Postgres container");
    }
}
