use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::foundation::error::{LaneError, LaneResult};

/// Failure of a single upstream GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// Upstream answered 404.
    NotFound,
    /// Any other non-success status.
    Status(u16),
    /// Connection, TLS or timeout failure.
    Network(String),
    /// Body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NotFound => write!(f, "not found (404)"),
            TransportError::Status(code) => write!(f, "HTTP status {code}"),
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
            TransportError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Authenticated JSON GET against the Riot platform.
///
/// The production implementation is [`HttpTransport`]; tests substitute canned responses.
pub trait RiotTransport: Send + Sync {
    fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
    ) -> impl Future<Output = Result<T, TransportError>> + Send;
}

/// `reqwest`-backed transport carrying the `X-Riot-Token` header.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    api_key: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> LaneResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("lanecard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LaneError::upstream(format!("build riot http client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            timeout,
        })
    }
}

impl RiotTransport for HttpTransport {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> Result<T, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .header("X-Riot-Token", &self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TransportError::NotFound);
        }
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
