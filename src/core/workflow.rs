use crate::core::fetcher::DataFetcher;
use crate::core::notifier::Notifier;
use crate::core::persister::DataPersister;
use crate::core::{HttpGet, MailTransport, Notification, StoreConnector};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub payload_bytes: usize,
    pub rows_inserted: u64,
    pub recipient: String,
}

/// Runs fetch, persist and notify in order. The first failure stops the run.
pub struct Workflow<H: HttpGet, C: StoreConnector, T: MailTransport> {
    fetcher: DataFetcher<H>,
    persister: DataPersister<C>,
    notifier: Notifier<T>,
    recipient: String,
    subject: String,
}

impl<H: HttpGet, C: StoreConnector, T: MailTransport> Workflow<H, C, T> {
    pub fn new(
        fetcher: DataFetcher<H>,
        persister: DataPersister<C>,
        notifier: Notifier<T>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            persister,
            notifier,
            recipient: recipient.into(),
            subject: subject.into(),
        }
    }

    pub async fn run(&self, user_input: &str) -> Result<RunReport> {
        tracing::info!("🌐 Fetching payload from {}", self.fetcher.endpoint());
        let payload = self.fetcher.fetch().await?;

        tracing::info!("💾 Saving {} byte payload", payload.byte_len());
        let rows_inserted = self.persister.persist(&payload).await?;

        tracing::info!("📧 Notifying {}", self.recipient);
        let notification = Notification::new(&self.recipient, &self.subject, user_input);
        self.notifier.send(&notification).await?;

        Ok(RunReport {
            payload_bytes: payload.byte_len(),
            rows_inserted,
            recipient: self.recipient.clone(),
        })
    }
}
