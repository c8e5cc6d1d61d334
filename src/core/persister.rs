use crate::config::DatabaseConfig;
use crate::core::{Payload, Statement, StoreConnection, StoreConnector};
use crate::utils::error::PersistenceError;

pub const INSERT_PAYLOAD_SQL: &str = "INSERT INTO mytable (column1, column2) VALUES (?, ?)";
pub const SECOND_COLUMN_VALUE: &str = "Another Value";

pub fn insert_statement(payload: &Payload) -> Statement {
    Statement::new(
        INSERT_PAYLOAD_SQL,
        vec![payload.as_str().to_string(), SECOND_COLUMN_VALUE.to_string()],
    )
}

pub struct DataPersister<C: StoreConnector> {
    connector: C,
    config: DatabaseConfig,
}

impl<C: StoreConnector> DataPersister<C> {
    pub fn new(connector: C, config: DatabaseConfig) -> Self {
        Self { connector, config }
    }

    /// Inserts `payload` and commits. The connection is closed on every path
    /// once it has been opened; a failure before that is returned first.
    pub async fn persist(&self, payload: &Payload) -> Result<u64, PersistenceError> {
        let statement = insert_statement(payload);

        let mut connection = self.connector.connect(&self.config).await?;
        tracing::debug!("Connected to {}", self.config.host);

        let outcome = write_and_commit(&mut connection, &statement).await;
        let released = connection.close().await;

        match (outcome, released) {
            (Ok(rows), Ok(())) => {
                tracing::debug!("Inserted {} row(s) into mytable", rows);
                Ok(rows)
            }
            (Ok(_), Err(close_err)) => Err(close_err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close_err)) => {
                tracing::warn!("Closing connection after failure also failed: {}", close_err);
                Err(err)
            }
        }
    }
}

async fn write_and_commit<S: StoreConnection>(
    connection: &mut S,
    statement: &Statement,
) -> Result<u64, PersistenceError> {
    let rows = connection.execute(statement).await?;
    connection.commit().await?;
    Ok(rows)
}
