use crate::core::HttpGet;
use crate::utils::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct ReqwestHttp {
    client: Client,
    timeout: Duration,
}

impl ReqwestHttp {
    /// Builds an HTTPS-only client; plaintext redirects fail too.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        Self::build(timeout, true)
    }

    fn build(timeout: Duration, https_only: bool) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("secure-etl/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .https_only(https_only)
            .build()?;
        Ok(Self { client, timeout })
    }

    fn classify_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            TransportError::Request(e)
        }
    }
}

#[async_trait]
impl HttpGet for ReqwestHttp {
    async fn get_text(&self, url: &Url) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        tracing::debug!("API response status: {}", response.status());
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| self.classify_error(e))
    }
}
