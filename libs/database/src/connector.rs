use async_trait::async_trait;

use crate::common::{BackendKind, ConnectionConfig, DatabaseResult};

/// Uniform lifecycle over every backend: configure on construction, `connect`, `close`
///
/// A connector owns at most one live handle. Calling `connect` while a handle is held
/// releases that handle before opening a new one, and a failed `connect` leaves the
/// connector without a handle.
///
/// # Example
///
/// ```ignore
/// use database::{BackendKind, ConnectionConfig, Connector};
/// use database::mysql::MySqlConnector;
///
/// let config = ConnectionConfig::from_env(BackendKind::RelationalSql)?;
/// let mut connector = MySqlConnector::new(config);
///
/// let conn = connector.connect().await?;
/// sqlx::query("SELECT 1").execute(&mut *conn).await?;
///
/// connector.close().await;
/// ```
#[async_trait]
pub trait Connector: Send {
    /// Live resource produced by `connect`
    type Handle: Send;

    fn config(&self) -> &ConnectionConfig;

    fn kind(&self) -> BackendKind {
        self.config().kind
    }

    fn is_connected(&self) -> bool;

    /// Open (and probe) a connection, storing and returning the handle
    async fn connect(&mut self) -> DatabaseResult<&mut Self::Handle>;

    /// Release the held handle; a no-op when nothing is held
    async fn close(&mut self);
}
