//! Local directory transport

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{Transport, TransportError};

/// Reads documents from a site directory on disk
#[derive(Debug, Clone)]
pub struct FsTransport {
    root: PathBuf,
}

impl FsTransport {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` under the root, refusing anything that would escape it
    fn resolve(&self, path: &str) -> Result<PathBuf, TransportError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(TransportError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl Transport for FsTransport {
    async fn get(&self, path: &str) -> Result<String, TransportError> {
        let full_path = self.resolve(path)?;
        tracing::debug!("Reading {:?}", full_path);

        match tokio::fs::read_to_string(&full_path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(TransportError::NotFound(path.to_string()))
            }
            Err(e) => Err(TransportError::Io {
                path: path.to_string(),
                source: e,
            }),
        }
    }
}
