//! Presentation surface - the named regions a page controller writes into

use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

use crate::helpers::{html_escape, INDEX_PAGE, MIN_QUERY_LEN};
use crate::i18n::Locale;

/// Named region of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    PostsList,
    PostTitle,
    PostDate,
    PostAuthor,
    PostContent,
}

impl Region {
    /// Element id of the region in the page markup
    pub fn id(self) -> &'static str {
        match self {
            Region::PostsList => "posts-list",
            Region::PostTitle => "post-title",
            Region::PostDate => "post-date",
            Region::PostAuthor => "post-author",
            Region::PostContent => "post-content",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("page has no `{0}` region")]
    MissingRegion(Region),
}

/// Where page controllers put their output
pub trait Surface {
    fn set_document_title(&mut self, title: &str);

    /// Replace the region's content with escaped text
    fn set_text(&mut self, region: Region, text: &str) -> Result<(), SurfaceError>;

    /// Replace the region's content with markup
    fn set_html(&mut self, region: Region, html: &str) -> Result<(), SurfaceError>;

    /// Keep the unfiltered list markup next to the list, so searching
    /// re-renders from it instead of refetching
    fn set_search_snapshot(&mut self, html: &str) -> Result<(), SurfaceError>;
}

/// Which page skeleton the surface represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    List,
    Post,
}

impl PageKind {
    fn regions(self) -> &'static [Region] {
        match self {
            PageKind::List => &[Region::PostsList],
            PageKind::Post => &[
                Region::PostTitle,
                Region::PostDate,
                Region::PostAuthor,
                Region::PostContent,
            ],
        }
    }
}

/// Surface that assembles a complete HTML document
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    kind: PageKind,
    site_title: String,
    language: String,
    document_title: String,
    search_query: String,
    search_snapshot: Option<String>,
    regions: IndexMap<Region, String>,
}

impl HtmlSurface {
    /// Create the skeleton of `kind` with all of its regions present and empty
    pub fn new(kind: PageKind, site_title: &str, language: &str) -> Self {
        Self {
            kind,
            site_title: site_title.to_string(),
            language: language.to_string(),
            document_title: site_title.to_string(),
            search_query: String::new(),
            search_snapshot: None,
            regions: kind
                .regions()
                .iter()
                .map(|r| (*r, String::new()))
                .collect(),
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    /// Current markup of a region
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Pre-fill the search box
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn search_snapshot(&self) -> Option<&str> {
        self.search_snapshot.as_deref()
    }

    fn slot(&mut self, region: Region) -> Result<&mut String, SurfaceError> {
        self.regions
            .get_mut(&region)
            .ok_or(SurfaceError::MissingRegion(region))
    }

    fn region_or_empty(&self, region: Region) -> &str {
        self.region(region).unwrap_or_default()
    }

    /// Assemble the full page
    pub fn into_html(self, locale: &Locale) -> String {
        let main = match self.kind {
            PageKind::List => format!(
                r#"<div class="search">
    <input type="search" id="search-input" value="{query}" placeholder="{placeholder}" data-min-query="{min_query}" autocomplete="off">
</div>
<div id="{list_id}">
{list}
</div>
{snapshot}{script}"#,
                query = html_escape(&self.search_query),
                placeholder = html_escape(&locale.search_placeholder),
                min_query = MIN_QUERY_LEN,
                list_id = Region::PostsList.id(),
                list = self.region_or_empty(Region::PostsList),
                snapshot = self
                    .search_snapshot
                    .as_deref()
                    .map(|html| format!("<template id=\"{}\">\n{}\n</template>\n", SNAPSHOT_ID, html))
                    .unwrap_or_default(),
                script = LIVE_SEARCH_SCRIPT,
            ),
            PageKind::Post => format!(
                r#"<article class="post">
    <h1 id="{title_id}">{title}</h1>
    <div class="post-meta"><span id="{date_id}">{date}</span><span id="{author_id}">{author}</span></div>
    <div id="{content_id}" class="post-content">
{content}
    </div>
</article>"#,
                title_id = Region::PostTitle.id(),
                title = self.region_or_empty(Region::PostTitle),
                date_id = Region::PostDate.id(),
                date = self.region_or_empty(Region::PostDate),
                author_id = Region::PostAuthor.id(),
                author = self.region_or_empty(Region::PostAuthor),
                content_id = Region::PostContent.id(),
                content = self.region_or_empty(Region::PostContent),
            ),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{document_title}</title>
    <link rel="stylesheet" href="css/style.css">
</head>
<body>
<header class="site-header"><a href="{index}">{site_title}</a></header>
<main>
{main}
</main>
<footer class="site-footer">{site_title}</footer>
</body>
</html>
"#,
            lang = html_escape(&self.language),
            document_title = html_escape(&self.document_title),
            index = INDEX_PAGE,
            site_title = html_escape(&self.site_title),
            main = main,
        )
    }
}

impl Surface for HtmlSurface {
    fn set_document_title(&mut self, title: &str) {
        self.document_title = title.to_string();
    }

    fn set_text(&mut self, region: Region, text: &str) -> Result<(), SurfaceError> {
        *self.slot(region)? = html_escape(text);
        Ok(())
    }

    fn set_html(&mut self, region: Region, html: &str) -> Result<(), SurfaceError> {
        *self.slot(region)? = html.to_string();
        Ok(())
    }

    fn set_search_snapshot(&mut self, html: &str) -> Result<(), SurfaceError> {
        if self.kind != PageKind::List {
            return Err(SurfaceError::MissingRegion(Region::PostsList));
        }
        self.search_snapshot = Some(html.to_string());
        Ok(())
    }
}

/// Element id of the template holding the unfiltered list
const SNAPSHOT_ID: &str = "posts-snapshot";

/// Filters the snapshot in the page on every keystroke: a post matches when
/// its title, excerpt or a tag contains the query, ignoring case. Queries
/// shorter than `data-min-query` characters show every post.
const LIVE_SEARCH_SCRIPT: &str = r#"<script>
(function() {
    var input = document.getElementById('search-input');
    var list = document.getElementById('posts-list');
    var snapshot = document.getElementById('posts-snapshot');
    if (!input || !list || !snapshot) return;
    var minQuery = parseInt(input.getAttribute('data-min-query'), 10) || 0;
    var posts = Array.prototype.slice.call(snapshot.content.children);
    input.addEventListener('input', function() {
        var query = input.value.trim().toLowerCase();
        var all = Array.from(query).length < minQuery;
        list.textContent = '';
        posts.forEach(function(post) {
            var fields = JSON.parse(post.getAttribute('data-search') || '[]');
            var hit = all || fields.some(function(field) {
                return field.toLowerCase().indexOf(query) !== -1;
            });
            if (hit) list.appendChild(post.cloneNode(true));
        });
    });
})();
</script>"#;
