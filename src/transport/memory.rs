//! In-memory transport for embedding pre-fetched sites and for tests

use std::collections::HashMap;

use super::{Transport, TransportError};

/// Serves documents from a path -> text map
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    documents: HashMap<String, String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, builder style
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: &str, content: &str) {
        self.documents
            .insert(path.trim_start_matches('/').to_string(), content.to_string());
    }
}

impl Transport for MemoryTransport {
    async fn get(&self, path: &str) -> Result<String, TransportError> {
        self.documents
            .get(path.trim_start_matches('/'))
            .cloned()
            .ok_or_else(|| TransportError::NotFound(path.to_string()))
    }
}
