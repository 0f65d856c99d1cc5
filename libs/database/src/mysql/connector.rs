use async_trait::async_trait;
use sqlx::{Connection, MySqlConnection};
use std::time::Duration;
use tracing::{error, info, warn};

use super::connect_options;
use crate::common::{BackendKind, ConnectionConfig, DatabaseError, DatabaseResult};
use crate::connector::Connector;

/// Relational SQL connector
///
/// # Example
/// ```ignore
/// use database::{Connector, mysql::MySqlConnector};
///
/// let mut mysql = MySqlConnector::from_env()?;
/// let conn = mysql.connect().await?;
/// let rows = sqlx::query("SELECT id FROM orders").fetch_all(&mut *conn).await?;
/// mysql.close().await;
/// ```
pub struct MySqlConnector {
    config: ConnectionConfig,
    conn: Option<MySqlConnection>,
}

impl MySqlConnector {
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config, conn: None }
    }

    /// Build from `MYSQL_*` environment variables
    pub fn from_env() -> DatabaseResult<Self> {
        Ok(Self::new(ConnectionConfig::from_env(
            BackendKind::RelationalSql,
        )?))
    }

    pub fn connection_mut(&mut self) -> Option<&mut MySqlConnection> {
        self.conn.as_mut()
    }

    async fn open(&self) -> DatabaseResult<MySqlConnection> {
        let kind = self.kind();
        let timeout = Duration::from_secs(self.config.connect_timeout_secs);
        let options = connect_options(&self.config);

        // sqlx has no connect timeout for a bare connection
        match tokio::time::timeout(timeout, MySqlConnection::connect_with(&options)).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(DatabaseError::connection(kind, e)),
            Err(elapsed) => Err(DatabaseError::connection(kind, elapsed)),
        }
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    type Handle = MySqlConnection;

    fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    async fn connect(&mut self) -> DatabaseResult<&mut MySqlConnection> {
        if self.conn.is_some() {
            warn!("MySQL connector already holds a connection, closing it before reconnecting");
            self.close().await;
        }

        info!("Attempting to connect to MySQL at {}", self.config.redacted_url());

        match self.open().await {
            Ok(conn) => {
                info!("Connected to MySQL: {}", self.config.database);
                Ok(self.conn.insert(conn))
            }
            Err(e) => {
                error!("MySQL connection failed: {}", e);
                Err(e)
            }
        }
    }

    async fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err(e) = conn.close().await {
                warn!("Error while closing MySQL connection: {}", e);
            }
            info!("MySQL connection closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> ConnectionConfig {
        ConnectionConfig::new(BackendKind::RelationalSql, "127.0.0.1", 1, "shop", "root", "pw")
            .with_connect_timeout(1)
    }

    #[tokio::test]
    async fn test_close_without_connect_is_noop() {
        let mut connector = MySqlConnector::new(unreachable_config());
        connector.close().await;
        assert!(!connector.is_connected());
        assert!(connector.connection_mut().is_none());
    }

    #[tokio::test]
    async fn test_connect_to_closed_port_fails_without_storing_handle() {
        let mut connector = MySqlConnector::new(unreachable_config());

        let err = connector.connect().await.map(|_| ()).unwrap_err();

        assert!(err.is_connection_error());
        assert_eq!(err.kind(), Some(BackendKind::RelationalSql));
        assert!(err.to_string().starts_with("MySQL connection failed"));
        assert!(!connector.is_connected());

        connector.close().await;
        assert!(!connector.is_connected());
    }

    #[test]
    fn test_from_env_missing_host() {
        temp_env::with_var_unset("MYSQL_HOST", || {
            assert!(matches!(
                MySqlConnector::from_env(),
                Err(DatabaseError::Config(_))
            ));
        });
    }
}
