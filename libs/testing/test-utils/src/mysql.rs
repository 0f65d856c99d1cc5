//! MySQL test infrastructure

use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mysql::Mysql;

use crate::ServiceEndpoint;

/// MySQL container with the module defaults: user `root`, empty password, database `test`
pub struct TestMySql {
    #[allow(dead_code)]
    container: ContainerAsync<Mysql>,
    endpoint: ServiceEndpoint,
}

impl TestMySql {
    pub async fn new() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host_port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get MySQL port");

        tracing::info!(port = host_port, "Test MySQL ready");

        Self {
            container,
            endpoint: ServiceEndpoint::local(host_port, "test", "root", ""),
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }
}

impl Drop for TestMySql {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MySQL container");
    }
}
