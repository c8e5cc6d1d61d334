use crate::config::DatabaseConfig;
use crate::domain::model::{Notification, Statement};
use crate::utils::error::{NotificationError, PersistenceError, TransportError};
use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get_text(&self, url: &Url) -> Result<String, TransportError>;
}

/// Opens one connection per call. Connections are never pooled.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    type Connection: StoreConnection;

    async fn connect(&self, config: &DatabaseConfig) -> Result<Self::Connection, PersistenceError>;
}

#[async_trait]
pub trait StoreConnection: Send {
    async fn execute(&mut self, statement: &Statement) -> Result<u64, PersistenceError>;
    async fn commit(&mut self) -> Result<(), PersistenceError>;
    /// Consumes the connection, so it can only be released once.
    async fn close(self) -> Result<(), PersistenceError>;
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError>;
}
