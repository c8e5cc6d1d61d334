#![allow(dead_code)]

use async_trait::async_trait;
use secure_etl::core::{HttpGet, MailTransport, Notification, Statement, StoreConnection, StoreConnector};
use secure_etl::config::{ADMIN_EMAIL, DB_HOST, DB_PASSWORD, DB_USER};
use secure_etl::{AppConfig, DatabaseConfig, NotificationError, PersistenceError, TransportError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

pub fn scenario_config() -> AppConfig {
    let env: HashMap<&str, &str> = HashMap::from([
        (DB_HOST, "h"),
        (DB_USER, "u"),
        (DB_PASSWORD, "p"),
        (ADMIN_EMAIL, "a@x.com"),
    ]);
    AppConfig::from_lookup(move |key| env.get(key).map(|v| v.to_string()))
}

#[derive(Clone)]
pub struct FakeHttp {
    pub body: Option<String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl FakeHttp {
    pub fn returning(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            requested: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            requested: Arc::default(),
        }
    }
}

#[async_trait]
impl HttpGet for FakeHttp {
    async fn get_text(&self, url: &Url) -> Result<String, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.body
            .clone()
            .ok_or(TransportError::Status { status: 502 })
    }
}

#[derive(Debug, Default)]
pub struct StoreLog {
    pub connected_host: Option<String>,
    pub executed: Vec<Statement>,
    pub commits: usize,
    pub closes: usize,
}

#[derive(Clone, Default)]
pub struct FakeStore {
    pub log: Arc<Mutex<StoreLog>>,
    pub fail_execute: bool,
}

pub struct FakeStoreConnection {
    log: Arc<Mutex<StoreLog>>,
    fail_execute: bool,
}

#[async_trait]
impl StoreConnector for FakeStore {
    type Connection = FakeStoreConnection;

    async fn connect(&self, config: &DatabaseConfig) -> Result<FakeStoreConnection, PersistenceError> {
        self.log.lock().unwrap().connected_host = Some(config.host.clone());
        Ok(FakeStoreConnection {
            log: self.log.clone(),
            fail_execute: self.fail_execute,
        })
    }
}

#[async_trait]
impl StoreConnection for FakeStoreConnection {
    async fn execute(&mut self, statement: &Statement) -> Result<u64, PersistenceError> {
        self.log.lock().unwrap().executed.push(statement.clone());
        if self.fail_execute {
            return Err(PersistenceError::Execute {
                message: "injected fault".to_string(),
            });
        }
        Ok(1)
    }

    async fn commit(&mut self) -> Result<(), PersistenceError> {
        self.log.lock().unwrap().commits += 1;
        Ok(())
    }

    async fn close(self) -> Result<(), PersistenceError> {
        self.log.lock().unwrap().closes += 1;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct Outbox {
    pub sent: Arc<Mutex<Vec<Notification>>>,
    pub unavailable: bool,
}

#[async_trait]
impl MailTransport for Outbox {
    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        if self.unavailable {
            return Err(NotificationError::Unavailable {
                program: "mail".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            });
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
