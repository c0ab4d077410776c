use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::riot::transport::{RiotTransport, TransportError};

/// In-memory transport answering from a fixed URL → response table.
///
/// Unknown URLs answer [`TransportError::NotFound`]. Every request is recorded in order, which
/// makes it suitable for offline replays and for asserting call sequences.
#[derive(Debug, Default)]
pub struct CannedTransport {
    responses: HashMap<String, Result<serde_json::Value, TransportError>>,
    requests: Mutex<Vec<String>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `body`.
    pub fn with_json(mut self, url: &Url, body: serde_json::Value) -> Self {
        self.responses.insert(url.to_string(), Ok(body));
        self
    }

    /// Answer `url` with a failure.
    pub fn with_error(mut self, url: &Url, err: TransportError) -> Self {
        self.responses.insert(url.to_string(), Err(err));
        self
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl RiotTransport for CannedTransport {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> Result<T, TransportError> {
        let key = url.to_string();
        if let Ok(mut log) = self.requests.lock() {
            log.push(key.clone());
        }
        match self.responses.get(&key) {
            Some(Ok(body)) => serde_json::from_value(body.clone())
                .map_err(|e| TransportError::Decode(e.to_string())),
            Some(Err(err)) => Err(err.clone()),
            None => Err(TransportError::NotFound),
        }
    }
}
