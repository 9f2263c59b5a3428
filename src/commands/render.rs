//! Render a page to a file or stdout

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::pages::RenderedPage;
use crate::Blog;

/// Render the list page. Returns `false` when the page ended in an error.
pub async fn index(blog: &Blog, query: Option<&str>, output: Option<&Path>) -> Result<bool> {
    let page = blog.render_list_page(query).await?;
    write_page(page, output)
}

/// Render the page for post `id`. Returns `false` when the page ended in an error.
pub async fn post(blog: &Blog, id: &str, output: Option<&Path>) -> Result<bool> {
    let page = blog.render_post_page(Some(id)).await?;
    write_page(page, output)
}

fn write_page(page: RenderedPage, output: Option<&Path>) -> Result<bool> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &page.html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => {
            std::io::stdout().write_all(page.html.as_bytes())?;
        }
    }

    if let Some(e) = &page.error {
        eprintln!("Page rendered with an error: {}", e);
    }
    Ok(page.error.is_none())
}
