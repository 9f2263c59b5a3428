//! Post list page

use super::surface::{Region, Surface, SurfaceError};
use super::PageState;
use crate::content::{IndexLoader, PostSummary};
use crate::helpers::{
    error_block, filter_posts, render_empty_list, render_post_list, sort_newest_first,
};
use crate::i18n::Locale;
use crate::transport::Transport;

/// Controller for the page listing every post
pub struct ListPage<'a, T: Transport> {
    loader: IndexLoader<'a, T>,
    locale: &'a Locale,
    state: PageState<Vec<PostSummary>>,
}

impl<'a, T: Transport> ListPage<'a, T> {
    pub fn new(loader: IndexLoader<'a, T>, locale: &'a Locale) -> Self {
        Self {
            loader,
            locale,
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState<Vec<PostSummary>> {
        &self.state
    }

    pub fn into_state(self) -> PageState<Vec<PostSummary>> {
        self.state
    }

    /// Fetch the index once and render it, newest first
    pub async fn load<S: Surface>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        if !self.state.is_loading() {
            tracing::warn!("List page already loaded, ignoring repeated load");
            return Ok(());
        }

        match self.loader.load_index().await {
            Ok(mut posts) => {
                sort_newest_first(&mut posts);
                tracing::debug!("List page ready with {} posts", posts.len());
                let snapshot = (!posts.is_empty()).then(|| render_post_list(&posts, self.locale));
                self.state = PageState::Ready(posts);
                if let Some(html) = snapshot {
                    surface.set_search_snapshot(&html)?;
                }
                self.search("", surface)
            }
            Err(e) => {
                tracing::warn!("Failed to load post index: {}", e);
                let reload = ("", self.locale.reload.as_str());
                let block = error_block(&self.locale.index_failed, Some(reload));
                self.state = PageState::Failed(e);
                surface.set_html(Region::PostsList, &block)
            }
        }
    }

    /// Re-render the list for `query` from the loaded snapshot. Does nothing
    /// unless the page is ready.
    pub fn search<S: Surface>(&self, query: &str, surface: &mut S) -> Result<(), SurfaceError> {
        match self.fragment(query) {
            Some(html) => surface.set_html(Region::PostsList, &html),
            None => Ok(()),
        }
    }

    /// Markup of the list region for `query`, once the page is ready
    pub fn fragment(&self, query: &str) -> Option<String> {
        let PageState::Ready(posts) = &self.state else {
            return None;
        };

        if posts.is_empty() {
            return Some(render_empty_list(self.locale));
        }

        let matching = filter_posts(posts, query);
        tracing::trace!("Query {:?} matched {} posts", query, matching.len());
        Some(render_post_list(matching, self.locale))
    }
}
