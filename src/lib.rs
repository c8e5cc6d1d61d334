pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CommandMailTransport, MySqlConnector, ReqwestHttp};
pub use config::{settings::Settings, AppConfig, DatabaseConfig};
pub use crate::core::{
    fetcher::DataFetcher, notifier::Notifier, persister::DataPersister, plan::Plan,
    workflow::Workflow,
};
pub use utils::error::{NotificationError, PersistenceError, Result, SecureEtlError, TransportError};
