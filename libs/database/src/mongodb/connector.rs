use async_trait::async_trait;
use mongodb::{Client, Database};
use tracing::{error, info, warn};

use super::{check_health, client_options};
use crate::common::{BackendKind, ConnectionConfig, DatabaseError, DatabaseResult};
use crate::connector::Connector;

/// Document-store connector
///
/// The handle is a `mongodb::Client`; [`MongoConnector::database`] hands out the
/// configured database.
///
/// # Example
/// ```ignore
/// use database::{BackendKind, ConnectionConfig, Connector};
/// use database::mongodb::MongoConnector;
///
/// let mut mongo = MongoConnector::new(ConnectionConfig::from_env(BackendKind::Document)?);
/// mongo.connect().await?;
/// let events = mongo.database().unwrap().collection::<Document>("events");
/// mongo.close().await;
/// ```
pub struct MongoConnector {
    config: ConnectionConfig,
    client: Option<Client>,
}

impl MongoConnector {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Build from `MONGO_*` environment variables
    pub fn from_env() -> DatabaseResult<Self> {
        Ok(Self::new(ConnectionConfig::from_env(BackendKind::Document)?))
    }

    /// The configured database on the live client
    pub fn database(&self) -> Option<Database> {
        self.client
            .as_ref()
            .map(|client| client.database(&self.config.database))
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    async fn open(&self) -> DatabaseResult<Client> {
        let kind = self.kind();

        let options = client_options(&self.config)
            .await
            .map_err(|e| DatabaseError::connection(kind, e))?;
        let client = Client::with_options(options).map_err(|e| DatabaseError::connection(kind, e))?;

        if let Err(e) = check_health(&client).await {
            client.shutdown().await;
            return Err(DatabaseError::connection(kind, e));
        }

        Ok(client)
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Handle = Client;

    fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    async fn connect(&mut self) -> DatabaseResult<&mut Client> {
        if self.client.is_some() {
            warn!("MongoDB connector already holds a client, closing it before reconnecting");
            self.close().await;
        }

        info!("Attempting to connect to MongoDB at {}", self.config.redacted_url());

        match self.open().await {
            Ok(client) => {
                info!("Connected to MongoDB: {}", self.config.database);
                Ok(self.client.insert(client))
            }
            Err(e) => {
                error!("MongoDB connection failed: {}", e);
                Err(e)
            }
        }
    }

    async fn close(&mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            info!("MongoDB connection closed");
        }
    }
}
