//! MySQL store over a single, unpooled sqlx connection.
use crate::config::DatabaseConfig;
use crate::core::{Statement, StoreConnection, StoreConnector};
use crate::utils::error::PersistenceError;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Executor};

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConnector;

pub struct MySqlStoreConnection {
    conn: MySqlConnection,
}

pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, PersistenceError> {
    let port = config.port().map_err(|e| PersistenceError::Connect {
        message: e.to_string(),
    })?;

    let mut opts = MySqlConnectOptions::new()
        .host(&config.host)
        .port(port)
        .username(&config.user)
        .password(config.password.expose_secret());
    if let Some(db) = &config.database {
        opts = opts.database(db);
    }
    Ok(opts)
}

#[async_trait]
impl StoreConnector for MySqlConnector {
    type Connection = MySqlStoreConnection;

    async fn connect(&self, config: &DatabaseConfig) -> Result<MySqlStoreConnection, PersistenceError> {
        let opts = connect_options(config)?;
        let mut conn = MySqlConnection::connect_with(&opts)
            .await
            .map_err(|e| PersistenceError::Connect {
                message: e.to_string(),
            })?;

        // 關閉 autocommit，寫入需明確 COMMIT
        let setup = conn.execute("SET autocommit = 0").await;
        if let Err(e) = setup {
            if let Err(close_err) = conn.close().await {
                tracing::warn!("Closing connection after setup failure failed: {}", close_err);
            }
            return Err(PersistenceError::Connect {
                message: e.to_string(),
            });
        }

        Ok(MySqlStoreConnection { conn })
    }
}

#[async_trait]
impl StoreConnection for MySqlStoreConnection {
    async fn execute(&mut self, statement: &Statement) -> Result<u64, PersistenceError> {
        let mut query = sqlx::query(statement.sql);
        for param in &statement.params {
            query = query.bind(param.as_str());
        }

        let result = query
            .execute(&mut self.conn)
            .await
            .map_err(|e| PersistenceError::Execute {
                message: e.to_string(),
            })?;
        Ok(result.rows_affected())
    }

    async fn commit(&mut self) -> Result<(), PersistenceError> {
        self.conn
            .execute("COMMIT")
            .await
            .map_err(|e| PersistenceError::Commit {
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn close(self) -> Result<(), PersistenceError> {
        self.conn.close().await.map_err(|e| PersistenceError::Release {
            message: e.to_string(),
        })
    }
}
