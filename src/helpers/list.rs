//! Post list rendering and search filtering

use std::cmp::Reverse;

use super::date::time_tag;
use super::html::{html_escape, link_to};
use super::url::post_url;
use crate::content::PostSummary;
use crate::i18n::Locale;

/// Queries shorter than this (after trimming) do not filter
pub const MIN_QUERY_LEN: usize = 2;

/// Render one preview block per post, in the order given
pub fn render_post_list<'a, I>(posts: I, locale: &Locale) -> String
where
    I: IntoIterator<Item = &'a PostSummary>,
{
    posts
        .into_iter()
        .map(|post| render_post_preview(post, locale))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Preview block for a single post
pub fn render_post_preview(post: &PostSummary, locale: &Locale) -> String {
    let url = post_url(&post.id);

    let mut meta = time_tag(post.date, locale);
    if let Some(author) = &post.author {
        meta.push_str(&format!(" • <span>{}</span>", html_escape(author)));
    }
    if let Some(category) = &post.category {
        meta.push_str(&format!(
            r#" • <span class="category">{}</span>"#,
            html_escape(category)
        ));
    }

    format!(
        r#"<article class="post-preview" data-post-id="{id}" data-search="{search}">
    <div class="post-meta">{meta}</div>
    <h2>{title}</h2>
    <div class="post-excerpt">{excerpt}</div>
    {more}
</article>"#,
        id = html_escape(&post.id),
        search = html_escape(&search_fields(post).to_string()),
        meta = meta,
        title = link_to(&url, &post.title, None),
        excerpt = html_escape(post.excerpt.as_deref().unwrap_or("")),
        more = link_to(&url, &locale.read_more, Some("read-more")),
    )
}

/// The fields [`filter_posts`] looks at, as a JSON array for the page script
fn search_fields(post: &PostSummary) -> serde_json::Value {
    let fields: Vec<&str> = std::iter::once(post.title.as_str())
        .chain(post.excerpt.as_deref())
        .chain(post.tags.iter().map(String::as_str))
        .collect();
    serde_json::Value::from(fields)
}

/// Shown instead of the list when the index has no posts
pub fn render_empty_list(locale: &Locale) -> String {
    format!("<p>{}</p>", html_escape(&locale.no_posts))
}

/// Posts whose title, excerpt or any tag contains `query`, ignoring case
///
/// Queries shorter than [`MIN_QUERY_LEN`] match everything.
pub fn filter_posts<'a>(posts: &'a [PostSummary], query: &str) -> Vec<&'a PostSummary> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return posts.iter().collect();
    }

    posts
        .iter()
        .filter(|post| matches_query(post, &query))
        .collect()
}

/// `query` must already be lowercased
fn matches_query(post: &PostSummary, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);

    contains(&post.title)
        || post.excerpt.as_deref().is_some_and(contains)
        || post.tags.iter().any(|tag| contains(tag.as_str()))
}

/// Sort by date, newest first; posts from the same day keep index order
pub fn sort_newest_first(posts: &mut [PostSummary]) {
    posts.sort_by_key(|post| Reverse(post.date));
}
