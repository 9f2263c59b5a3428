//! Transports - where the index and post documents come from
//!
//! A site is read either over plain HTTP GET or straight from a directory on
//! disk. Both answer the same question: "give me the text at this relative
//! path", and report a missing resource distinctly from other failures.

mod fs;
mod http;
mod memory;

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

pub use fs::FsTransport;
pub use http::HttpTransport;
pub use memory::MemoryTransport;

/// Transport-level failures
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("resource `{0}` does not exist")]
    NotFound(String),

    #[error("request for `{path}` returned status {status}")]
    Status { path: String, status: u16 },

    #[error("request for `{0}` timed out")]
    Timeout(String),

    #[error("IO error when reading `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request for `{path}` failed")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid resource path `{0}`")]
    InvalidPath(String),
}

/// Fetches text documents by path relative to the site source
pub trait Transport: Send + Sync {
    /// Fetch the full text at `path`
    fn get(&self, path: &str) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// The transport a configured site actually uses
#[derive(Debug, Clone)]
pub enum SiteTransport {
    Http(HttpTransport),
    Fs(FsTransport),
}

impl SiteTransport {
    /// Pick a transport for `source`: an `http(s)://` base URL, or a
    /// directory resolved against `base_dir`
    pub fn from_source(
        source: &str,
        base_dir: &Path,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Ok(SiteTransport::Http(HttpTransport::new(source, timeout)?))
        } else {
            Ok(SiteTransport::Fs(FsTransport::new(base_dir.join(source))))
        }
    }

    /// Local directory backing this transport, if any
    pub fn local_root(&self) -> Option<&Path> {
        match self {
            SiteTransport::Fs(fs) => Some(fs.root()),
            SiteTransport::Http(_) => None,
        }
    }
}

impl Transport for SiteTransport {
    async fn get(&self, path: &str) -> Result<String, TransportError> {
        match self {
            SiteTransport::Http(http) => http.get(path).await,
            SiteTransport::Fs(fs) => fs.get(path).await,
        }
    }
}
