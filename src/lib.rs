//! blogfront: reader front end for a static markdown blog
//!
//! A site is a JSON index of post summaries plus one markdown document per
//! post, served over HTTP or kept in a local directory. This crate loads
//! them, splits each post's front-matter from its body, renders the list
//! and post pages, and filters the list with a substring search.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod pages;
pub mod server;
pub mod transport;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{IndexLoader, MarkdownRenderer, PostLoader};
use pages::{HtmlSurface, ListPage, PageKind, PostPage, RenderedPage};
use transport::SiteTransport;

/// Name of the configuration file at the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// A configured site, ready to load and render pages
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    transport: SiteTransport,
    renderer: MarkdownRenderer,
}

impl Blog {
    /// Open the site in `base_dir`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(config, base_dir)
    }

    /// Build a site from an explicit configuration
    pub fn with_config(config: config::SiteConfig, base_dir: PathBuf) -> Result<Self> {
        let transport =
            SiteTransport::from_source(&config.source, &base_dir, config.fetch_timeout())?;
        let renderer = MarkdownRenderer::from_config(&config.markdown, &config.highlight);
        tracing::debug!("Site source: {:?}", transport);

        Ok(Self {
            config,
            base_dir,
            transport,
            renderer,
        })
    }

    pub fn transport(&self) -> &SiteTransport {
        &self.transport
    }

    pub fn index_loader(&self) -> IndexLoader<'_, SiteTransport> {
        IndexLoader::new(&self.transport, self.config.paths.clone())
    }

    pub fn post_loader(&self) -> PostLoader<'_, SiteTransport> {
        PostLoader::new(
            &self.transport,
            self.config.paths.clone(),
            &self.config.locale.untitled,
        )
    }

    /// Controller for the list page
    pub fn list_page(&self) -> ListPage<'_, SiteTransport> {
        ListPage::new(self.index_loader(), &self.config.locale)
    }

    /// Controller for a single post page
    pub fn post_page(&self) -> PostPage<'_, SiteTransport> {
        PostPage::new(
            self.post_loader(),
            &self.renderer,
            &self.config.locale,
            &self.config.title,
        )
    }

    fn surface(&self, kind: PageKind) -> HtmlSurface {
        HtmlSurface::new(kind, &self.config.title, &self.config.language)
    }

    /// Load and render the list page, optionally pre-filtered by `query`
    ///
    /// The index is fetched once; the page carries the loaded list so the
    /// reader's search filters it without another request.
    pub async fn render_list_page(&self, query: Option<&str>) -> Result<RenderedPage> {
        let mut surface = self.surface(PageKind::List);
        let mut page = self.list_page();
        page.load(&mut surface).await?;

        if let Some(query) = query {
            surface.set_search_query(query);
            page.search(query, &mut surface)?;
        }

        Ok(RenderedPage {
            html: surface.into_html(&self.config.locale),
            error: page.into_state().into_error(),
        })
    }

    /// Load and render the page for post `id`
    pub async fn render_post_page(&self, id: Option<&str>) -> Result<RenderedPage> {
        let mut surface = self.surface(PageKind::Post);
        let mut page = self.post_page();
        page.load(id, &mut surface).await?;

        Ok(RenderedPage {
            html: surface.into_html(&self.config.locale),
            error: page.into_state().into_error(),
        })
    }
}
