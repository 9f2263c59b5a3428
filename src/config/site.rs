//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::i18n::Locale;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    /// Base URL (`http://`/`https://`) or directory holding the posts
    pub source: String,
    #[serde(flatten)]
    pub paths: SourceConfig,

    /// Fetch timeout in seconds, 0 disables it
    pub fetch_timeout: u64,

    /// Directories of a local site served as static files, besides the
    /// posts directory
    pub assets: Vec<String>,

    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Юридический блог".to_string(),
            language: "ru".to_string(),
            source: ".".to_string(),
            paths: SourceConfig::default(),
            fetch_timeout: 10,
            assets: vec!["css".to_string(), "images".to_string()],
            markdown: MarkdownConfig::default(),
            highlight: HighlightConfig::default(),
            locale: Locale::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.fetch_timeout > 0).then(|| Duration::from_secs(self.fetch_timeout))
    }

    /// Directories served as static files: the assets plus the posts
    /// directory, relative to the site source and without duplicates
    pub fn static_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = Vec::new();
        let candidates = self
            .assets
            .iter()
            .chain(std::iter::once(&self.paths.posts_path));
        for dir in candidates {
            let dir = dir.trim().trim_matches('/');
            if dir.is_empty() || dir == "." || dir.split('/').any(|part| part == "..") {
                continue;
            }
            if !dirs.iter().any(|d| d == dir) {
                dirs.push(dir.to_string());
            }
        }
        dirs
    }
}

/// Where the index and the post documents live, relative to `source`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub index_path: String,
    pub posts_path: String,
    /// Extension of post documents, without the dot
    pub post_extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            index_path: "posts/index.json".to_string(),
            posts_path: "posts/".to_string(),
            post_extension: "md".to_string(),
        }
    }
}

impl SourceConfig {
    /// Path of the document for post `id`
    pub fn post_path(&self, id: &str) -> String {
        let dir = self.posts_path.trim_end_matches('/');
        let ext = self.post_extension.trim_start_matches('.');
        if dir.is_empty() {
            format!("{}.{}", id, ext)
        } else {
            format!("{}/{}.{}", dir, id, ext)
        }
    }
}

/// Markdown rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Render single newlines as `<br>`
    pub breaks: bool,
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            breaks: true,
            smart_punctuation: false,
        }
    }
}

/// Code block highlighting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub line_number: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            line_number: false,
            theme: "InspiredGitHub".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.paths.index_path, "posts/index.json");
        assert_eq!(config.paths.post_extension, "md");
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(10)));
        assert!(config.markdown.breaks);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Tax Notes
source: https://example.com/blog
post_extension: txt
fetch_timeout: 0
highlight:
  enable: false
locale:
  error_label: Error
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Tax Notes");
        assert_eq!(config.source, "https://example.com/blog");
        assert_eq!(config.paths.post_extension, "txt");
        assert_eq!(config.paths.posts_path, "posts/");
        assert_eq!(config.fetch_timeout(), None);
        assert!(!config.highlight.enable);
        assert_eq!(config.locale.error_label, "Error");
        // untouched strings keep their defaults
        assert_eq!(config.locale.back_to_list, Locale::default().back_to_list);
    }

    #[test]
    fn test_static_dirs() {
        assert_eq!(SiteConfig::default().static_dirs(), vec!["css", "images", "posts"]);

        let config = SiteConfig {
            assets: vec![
                "/css/".to_string(),
                "".to_string(),
                ".".to_string(),
                "../secret".to_string(),
                "posts".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(config.static_dirs(), vec!["css", "posts"]);
    }

    #[test]
    fn test_post_path() {
        let paths = SourceConfig::default();
        assert_eq!(paths.post_path("p1"), "posts/p1.md");

        let paths = SourceConfig {
            posts_path: "".to_string(),
            post_extension: ".txt".to_string(),
            ..Default::default()
        };
        assert_eq!(paths.post_path("p1"), "p1.txt");
    }
}
