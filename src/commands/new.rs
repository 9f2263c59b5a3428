//! Create a new post

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;

use crate::content::PostSummary;
use crate::Blog;

/// Fields for a new post; the title is required
#[derive(Debug, Default)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub category: Option<&'a str>,
    pub excerpt: Option<&'a str>,
    pub tags: Vec<String>,
}

/// Write the post document and list it first in the index
pub fn create_post(blog: &Blog, post: &NewPost) -> Result<PostSummary> {
    let Some(root) = blog.transport().local_root() else {
        anyhow::bail!("Posts can only be created in a local site, not {}", blog.config.source);
    };

    let id = slug::slugify(post.title);
    if id.is_empty() {
        anyhow::bail!("Cannot derive an identifier from title {:?}", post.title);
    }

    let file_path = root.join(blog.config.paths.post_path(&id));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let summary = PostSummary {
        id,
        title: post.title.to_string(),
        date: chrono::Local::now().date_naive(),
        author: post.author.map(str::to_string),
        category: post.category.map(str::to_string),
        excerpt: post.excerpt.map(str::to_string),
        tags: post.tags.clone(),
    };

    let index_path = root.join(&blog.config.paths.index_path);
    let mut entries: Vec<Value> = if index_path.exists() {
        let raw = fs::read_to_string(&index_path)?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid index {:?}", index_path))?
    } else {
        Vec::new()
    };
    if entries
        .iter()
        .any(|e| e.get("id").and_then(Value::as_str) == Some(summary.id.as_str()))
    {
        anyhow::bail!("Index already has a post with id {:?}", summary.id);
    }
    entries.insert(0, serde_json::to_value(&summary)?);

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, front_matter_document(&summary))?;
    if let Some(parent) = index_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&index_path, serde_json::to_string_pretty(&entries)? + "\n")?;

    println!("Created: {:?}", file_path);
    Ok(summary)
}

fn front_matter_document(summary: &PostSummary) -> String {
    let mut doc = String::from("---\n");
    doc.push_str(&format!("title: {}\n", quote_if_needed(&summary.title)));
    doc.push_str(&format!("date: {}\n", summary.date.format("%Y-%m-%d")));
    if let Some(author) = &summary.author {
        doc.push_str(&format!("author: {}\n", quote_if_needed(author)));
    }
    if let Some(category) = &summary.category {
        doc.push_str(&format!("category: {}\n", quote_if_needed(category)));
    }
    if !summary.tags.is_empty() {
        doc.push_str(&format!("tags: [{}]\n", summary.tags.join(", ")));
    }
    doc.push_str("---\n\n");
    doc
}

/// Quote values whose surrounding whitespace or quotes would otherwise be lost
fn quote_if_needed(value: &str) -> String {
    let needs_quotes = value != value.trim()
        || value.starts_with(['"', '\''])
        || value.ends_with(['"', '\'']);
    if needs_quotes && !value.contains('"') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::FrontMatter;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_post() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(
            dir.path().join("posts/index.json"),
            r#"[{"id":"old","title":"Old","date":"2020-01-01","extra":"kept"}]"#,
        )
        .unwrap();
        let blog = Blog::with_config(SiteConfig::default(), dir.path().to_path_buf()).unwrap();

        let post = NewPost {
            title: "Tax Law: Basics",
            author: Some("Anna"),
            tags: vec!["taxes".to_string()],
            ..Default::default()
        };
        let summary = create_post(&blog, &post).unwrap();
        assert_eq!(summary.id, "tax-law-basics");

        let raw = fs::read_to_string(dir.path().join("posts/tax-law-basics.md")).unwrap();
        let (fm, _) = FrontMatter::parse(&raw);
        assert_eq!(fm.title(), "Tax Law: Basics");
        assert_eq!(fm.author(), Some("Anna"));
        assert_eq!(fm.tags(), vec!["taxes"]);

        let index = fs::read_to_string(dir.path().join("posts/index.json")).unwrap();
        assert!(index.contains("\"extra\": \"kept\""));
        let posts = blog.index_loader().load_index().await.unwrap();
        assert_eq!(posts[0].id, "tax-law-basics");
        assert_eq!(posts[1].id, "old");

        assert!(create_post(&blog, &post).is_err());
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("plain: colon"), "plain: colon");
        assert_eq!(quote_if_needed("'quoted'"), "\"'quoted'\"");
        assert_eq!(quote_if_needed(" padded"), "\" padded\"");
    }
}
