//! Content loaders - fetch the post index and single post documents

use super::{PostDocument, PostSummary};
use crate::config::SourceConfig;
use crate::error::LoadError;
use crate::transport::{Transport, TransportError};

/// Loads the list of post summaries
pub struct IndexLoader<'a, T: Transport> {
    transport: &'a T,
    paths: SourceConfig,
}

impl<'a, T: Transport> IndexLoader<'a, T> {
    pub fn new(transport: &'a T, paths: SourceConfig) -> Self {
        Self { transport, paths }
    }

    /// Fetch and parse the index, keeping the order of the source
    pub async fn load_index(&self) -> Result<Vec<PostSummary>, LoadError> {
        let path = &self.paths.index_path;

        let raw = self
            .transport
            .get(path)
            .await
            .map_err(|source| LoadError::Fetch {
                path: path.clone(),
                source,
            })?;

        let posts: Vec<PostSummary> = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded {} post summaries from {}", posts.len(), path);
        Ok(posts)
    }
}

/// Loads a single post document by identifier
pub struct PostLoader<'a, T: Transport> {
    transport: &'a T,
    paths: SourceConfig,
    fallback_title: String,
}

impl<'a, T: Transport> PostLoader<'a, T> {
    pub fn new(transport: &'a T, paths: SourceConfig, fallback_title: &str) -> Self {
        Self {
            transport,
            paths,
            fallback_title: fallback_title.to_string(),
        }
    }

    /// Fetch post `id` and split its header from the body
    pub async fn load_post(&self, id: &str) -> Result<PostDocument, LoadError> {
        if id.trim().is_empty() {
            return Err(LoadError::MissingIdentifier);
        }
        if !is_valid_id(id) {
            tracing::warn!("Rejecting post identifier {:?}", id);
            return Err(LoadError::NotFound(id.to_string()));
        }

        let path = self.paths.post_path(id);
        let raw = self.transport.get(&path).await.map_err(|e| match e {
            TransportError::NotFound(_) | TransportError::InvalidPath(_) => {
                LoadError::NotFound(id.to_string())
            }
            source => LoadError::Fetch {
                path: path.clone(),
                source,
            },
        })?;

        if raw.trim().is_empty() {
            return Err(LoadError::EmptyPost(id.to_string()));
        }

        tracing::debug!("Loaded post {} ({} bytes)", id, raw.len());
        Ok(PostDocument::parse(id, &raw, &self.fallback_title))
    }
}

/// Identifiers name a file in the posts directory and nothing else
fn is_valid_id(id: &str) -> bool {
    id == id.trim()
        && !id.contains(['/', '\\']) && !id.contains("..") && !id.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    const INDEX: &str = r#"[
        {"id":"b","title":"Second","date":"2024-03-01"},
        {"id":"a","title":"First","date":"2024-01-10","excerpt":"intro","tags":["x"]}
    ]"#;

    fn transport() -> MemoryTransport {
        MemoryTransport::new()
            .with("posts/index.json", INDEX)
            .with("posts/a.md", "---\ntitle: First\n---\nHello")
            .with("posts/plain.md", "No header at all")
            .with("posts/blank.md", "  \n")
    }

    #[tokio::test]
    async fn test_load_index_keeps_source_order() {
        let transport = transport();
        let loader = IndexLoader::new(&transport, SourceConfig::default());
        let posts = loader.load_index().await.unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(posts[1].tags, vec!["x"]);
    }

    #[tokio::test]
    async fn test_load_index_missing_is_fetch_error() {
        let transport = MemoryTransport::new();
        let loader = IndexLoader::new(&transport, SourceConfig::default());
        let err = loader.load_index().await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_load_index_bad_shape_is_parse_error() {
        for body in ["not json", r#"{"id":"a"}"#, r#"[{"id":"a"}]"#] {
            let transport = MemoryTransport::new().with("posts/index.json", body);
            let loader = IndexLoader::new(&transport, SourceConfig::default());
            let err = loader.load_index().await.unwrap_err();
            assert!(matches!(err, LoadError::Parse(_)), "{}", body);
        }
    }

    #[tokio::test]
    async fn test_load_post() {
        let transport = transport();
        let loader = PostLoader::new(&transport, SourceConfig::default(), "Untitled");
        let doc = loader.load_post("a").await.unwrap();
        assert_eq!(doc.title(), "First");
        assert_eq!(doc.body, "Hello");

        let doc = loader.load_post("plain").await.unwrap();
        assert_eq!(doc.title(), "Untitled");
        assert_eq!(doc.body, "No header at all");
    }

    #[tokio::test]
    async fn test_load_post_errors() {
        let transport = transport();
        let loader = PostLoader::new(&transport, SourceConfig::default(), "Untitled");

        assert!(matches!(
            loader.load_post("  ").await,
            Err(LoadError::MissingIdentifier)
        ));
        assert!(matches!(
            loader.load_post("missing").await,
            Err(LoadError::NotFound(id)) if id == "missing"
        ));
        assert!(matches!(
            loader.load_post("../etc/passwd").await,
            Err(LoadError::NotFound(_))
        ));
        assert!(matches!(
            loader.load_post(" a ").await,
            Err(LoadError::NotFound(id)) if id == " a "
        ));
        assert!(matches!(
            loader.load_post("blank").await,
            Err(LoadError::EmptyPost(_))
        ));
    }

    #[tokio::test]
    async fn test_post_extension_from_config() {
        let transport = MemoryTransport::new().with("articles/a.txt", "text body");
        let paths = SourceConfig {
            posts_path: "articles/".to_string(),
            post_extension: "txt".to_string(),
            ..Default::default()
        };
        let loader = PostLoader::new(&transport, paths, "Untitled");
        assert_eq!(loader.load_post("a").await.unwrap().body, "text body");
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id("tax-law_2024"));
        assert!(is_valid_id("налоги"));
        assert!(!is_valid_id("a/b"));
        assert!(!is_valid_id("a\\b"));
        assert!(!is_valid_id(".."));
        assert!(!is_valid_id("a\nb"));
        assert!(!is_valid_id(" a"));
        assert!(!is_valid_id("a\t"));
    }
}
