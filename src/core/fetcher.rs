use crate::core::{HttpGet, Payload};
use crate::utils::error::TransportError;
use url::Url;

/// An endpoint that is known to use `https`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpsEndpoint(Url);

impl HttpsEndpoint {
    pub fn parse(raw: &str) -> Result<Self, TransportError> {
        let url = Url::parse(raw).map_err(|e| TransportError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "https" {
            return Err(TransportError::InsecureScheme {
                scheme: url.scheme().to_string(),
            });
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(TransportError::InvalidEndpoint {
                url: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for HttpsEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

pub struct DataFetcher<H: HttpGet> {
    http: H,
    endpoint: HttpsEndpoint,
}

impl<H: HttpGet> DataFetcher<H> {
    /// Fails before any network activity if `endpoint` is not `https`.
    pub fn new(http: H, endpoint: &str) -> Result<Self, TransportError> {
        Ok(Self {
            http,
            endpoint: HttpsEndpoint::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &HttpsEndpoint {
        &self.endpoint
    }

    pub async fn fetch(&self) -> Result<Payload, TransportError> {
        tracing::debug!("Fetching payload from: {}", self.endpoint);
        let body = self.http.get_text(self.endpoint.as_url()).await?;
        tracing::debug!("Fetched {} bytes", body.len());
        Ok(Payload::new(body))
    }
}
