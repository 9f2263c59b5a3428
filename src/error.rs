//! Load error taxonomy shared by the loaders and page controllers

use thiserror::Error;

use crate::transport::TransportError;

/// Why an index or post could not be produced
///
/// Frontmatter problems never end up here: a malformed header falls back to
/// treating the whole document as body.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch `{path}`")]
    Fetch {
        path: String,
        #[source]
        source: TransportError,
    },

    #[error("post `{0}` not found")]
    NotFound(String),

    #[error("no post identifier supplied")]
    MissingIdentifier,

    #[error("index document has an unexpected shape")]
    Parse(#[from] serde_json::Error),

    #[error("post `{0}` is empty")]
    EmptyPost(String),
}

impl LoadError {
    /// Whether the error means the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::NotFound("p1".to_string());
        assert!(err.to_string().contains("p1"));
        assert!(err.is_not_found());

        let err = LoadError::Fetch {
            path: "posts/index.json".to_string(),
            source: TransportError::Status {
                path: "posts/index.json".to_string(),
                status: 500,
            },
        };
        let display = format!("{err}");
        assert!(display.contains("posts/index.json"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_parse_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
