//! HTTP GET transport

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use super::{Transport, TransportError};

/// Reads documents relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Create a transport rooted at `base`. Without a timeout a stalled
    /// request waits indefinitely.
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        // Url::join drops the last segment unless the base ends with '/'
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&base).map_err(|_| TransportError::InvalidPath(base.clone()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| TransportError::Request {
            path: base.to_string(),
            source: e,
        })?;

        Ok(Self { client, base })
    }

    /// Base URL documents are resolved against
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|_| TransportError::InvalidPath(path.to_string()))
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String, TransportError> {
        let url = self.url_for(path)?;
        tracing::debug!("GET {}", url);

        let request_error = |e: reqwest::Error| {
            if e.is_timeout() {
                TransportError::Timeout(path.to_string())
            } else {
                TransportError::Request {
                    path: path.to_string(),
                    source: e,
                }
            }
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", path, status);

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(TransportError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(TransportError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(request_error)
    }
}
