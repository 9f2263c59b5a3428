//! List site posts

use anyhow::Result;

use crate::helpers::{filter_posts, sort_newest_first};
use crate::Blog;

/// Print the posts matching `query`, newest first
pub async fn run(blog: &Blog, query: Option<&str>) -> Result<()> {
    let mut posts = blog.index_loader().load_index().await?;
    sort_newest_first(&mut posts);

    let matching = filter_posts(&posts, query.unwrap_or_default());
    println!("Posts ({}):", matching.len());
    for post in matching {
        println!(
            "  {} - {} [{}]",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.id
        );
    }

    Ok(())
}
