use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection};
use tracing::{error, info, warn};

use super::{check_health_with_query, connect_options};
use crate::common::{BackendKind, ConnectionConfig, DatabaseError, DatabaseResult};
use crate::connector::Connector;

/// Warehouse connector
///
/// # Example
/// ```ignore
/// use database::{Connector, redshift::RedshiftConnector};
/// use sea_orm::ConnectionTrait;
///
/// let mut redshift = RedshiftConnector::from_env()?;
/// let db = redshift.connect().await?;
/// db.execute_unprepared("ANALYZE events").await?;
/// redshift.close().await;
/// ```
pub struct RedshiftConnector {
    config: ConnectionConfig,
    probe_query: String,
    db: Option<DatabaseConnection>,
}

impl RedshiftConnector {
    pub const DEFAULT_PROBE_QUERY: &'static str = "SELECT 1";

    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            probe_query: Self::DEFAULT_PROBE_QUERY.to_string(),
            db: None,
        }
    }

    /// Liveness query run after connecting, e.g. a read on a table the job needs
    pub fn with_probe_query(mut self, query: impl Into<String>) -> Self {
        self.probe_query = query.into();
        self
    }

    pub fn probe_query(&self) -> &str {
        &self.probe_query
    }

    /// Build from `REDSHIFT_*` environment variables
    pub fn from_env() -> DatabaseResult<Self> {
        Ok(Self::new(ConnectionConfig::from_env(BackendKind::Warehouse)?))
    }

    pub fn connection(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    async fn open(&self) -> DatabaseResult<DatabaseConnection> {
        let kind = self.kind();

        let db = Database::connect(connect_options(&self.config))
            .await
            .map_err(|e| DatabaseError::connection(kind, e))?;

        if let Err(e) = check_health_with_query(&db, &self.probe_query).await {
            if let Err(close_err) = db.close().await {
                warn!("Failed to close Redshift connection after probe failure: {}", close_err);
            }
            return Err(DatabaseError::probe(kind, e));
        }

        Ok(db)
    }
}

#[async_trait]
impl Connector for RedshiftConnector {
    type Handle = DatabaseConnection;

    fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    async fn connect(&mut self) -> DatabaseResult<&mut DatabaseConnection> {
        if self.db.is_some() {
            warn!("Redshift connector already holds a connection, closing it before reconnecting");
            self.close().await;
        }

        info!("Attempting to connect to Redshift at {}", self.config.redacted_url());

        match self.open().await {
            Ok(db) => {
                info!("Connected to Redshift: {}", self.config.database);
                Ok(self.db.insert(db))
            }
            Err(e) => {
                error!("Redshift connection failed: {}", e);
                Err(e)
            }
        }
    }

    async fn close(&mut self) {
        if let Some(db) = self.db.take() {
            if let Err(e) = db.close().await {
                warn!("Error while closing Redshift connection: {}", e);
            }
            info!("Redshift connection closed");
        }
    }
}
