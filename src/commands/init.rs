//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default _config.yml written by `init`
const CONFIG_TEMPLATE: &str = r#"# Site
title: Юридический блог
language: ru

# Where the posts live: a directory relative to this file,
# or a base URL such as https://example.com/blog/
source: .
index_path: posts/index.json
posts_path: posts/
post_extension: md

# Seconds to wait for a fetch, 0 waits forever
fetch_timeout: 10

# Directories the server exposes as static files, besides the posts
assets: [css, images]

markdown:
  breaks: true
  smart_punctuation: false

highlight:
  enable: true
  line_number: false
  theme: InspiredGitHub

# Override any user-facing string, e.g.
# locale:
#   read_more: Читать далее →
"#;

const SAMPLE_INDEX: &str = r#"[
  {
    "id": "hello",
    "title": "Добро пожаловать",
    "date": "2024-01-10",
    "author": "Редакция",
    "category": "Новости",
    "excerpt": "Первая запись в блоге.",
    "tags": ["блог"]
  }
]
"#;

const SAMPLE_POST: &str = r#"---
title: Добро пожаловать
date: 2024-01-10
author: Редакция
---
Это первая запись в блоге.

Посты пишутся в **markdown**.
"#;

const SAMPLE_STYLE: &str = r#"body { max-width: 46rem; margin: 0 auto; padding: 1rem; font-family: sans-serif; }
.post-meta { color: #666; font-size: 0.9rem; }
.error { color: #a00; }
#search-input { width: 100%; padding: 0.5rem; }
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("posts"))?;
    fs::create_dir_all(target_dir.join("css"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    write_if_missing(&target_dir.join("posts/index.json"), SAMPLE_INDEX)?;
    write_if_missing(&target_dir.join("posts/hello.md"), SAMPLE_POST)?;
    write_if_missing(&target_dir.join("css/style.css"), SAMPLE_STYLE)?;

    tracing::debug!("Initialized site in {:?}", target_dir);
    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if !path.exists() {
        fs::write(path, content)?;
    }
    Ok(())
}
