pub mod fetcher;
pub mod notifier;
pub mod persister;
pub mod plan;
pub mod workflow;

pub use crate::domain::model::{Notification, Payload, Statement};
pub use crate::domain::ports::{HttpGet, MailTransport, StoreConnection, StoreConnector};
pub use crate::utils::error::Result;
