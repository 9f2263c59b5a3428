//! Single post page

use super::surface::{Region, Surface, SurfaceError};
use super::PageState;
use crate::content::{MarkdownRenderer, PostDocument, PostLoader};
use crate::error::LoadError;
use crate::helpers::{display_date, error_block, INDEX_PAGE};
use crate::i18n::Locale;
use crate::transport::Transport;

/// Controller for the page showing one post
pub struct PostPage<'a, T: Transport> {
    loader: PostLoader<'a, T>,
    renderer: &'a MarkdownRenderer,
    locale: &'a Locale,
    site_title: &'a str,
    state: PageState<PostDocument>,
}

impl<'a, T: Transport> PostPage<'a, T> {
    pub fn new(
        loader: PostLoader<'a, T>,
        renderer: &'a MarkdownRenderer,
        locale: &'a Locale,
        site_title: &'a str,
    ) -> Self {
        Self {
            loader,
            renderer,
            locale,
            site_title,
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState<PostDocument> {
        &self.state
    }

    pub fn into_state(self) -> PageState<PostDocument> {
        self.state
    }

    /// Load the post named by the page's `id` parameter and render it
    pub async fn load<S: Surface>(
        &mut self,
        id: Option<&str>,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        if !self.state.is_loading() {
            tracing::warn!("Post page already loaded, ignoring repeated load");
            return Ok(());
        }

        let result = match id {
            Some(id) => self.loader.load_post(id).await,
            None => Err(LoadError::MissingIdentifier),
        };

        match result {
            Ok(doc) => {
                self.render_document(&doc, surface)?;
                self.state = PageState::Ready(doc);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {}", id, e);
                let message = match e {
                    LoadError::MissingIdentifier => &self.locale.missing_id,
                    _ => &self.locale.post_failed,
                };
                let message = message.clone();
                self.state = PageState::Failed(e);
                self.show_error(&message, surface)
            }
        }
    }

    fn render_document<S: Surface>(
        &self,
        doc: &PostDocument,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        let content = self.renderer.render(&doc.body);

        surface.set_document_title(&format!("{} | {}", doc.title(), self.site_title));
        surface.set_text(Region::PostTitle, doc.title())?;
        if let Some(date) = doc.date() {
            surface.set_text(Region::PostDate, &display_date(date, self.locale))?;
        }
        if let Some(author) = doc.author() {
            surface.set_text(Region::PostAuthor, &format!(" • {}", author))?;
        }
        surface.set_html(Region::PostContent, &content)?;

        tracing::debug!("Rendered post {}", doc.id);
        Ok(())
    }

    fn show_error<S: Surface>(&self, message: &str, surface: &mut S) -> Result<(), SurfaceError> {
        let label = &self.locale.error_label;
        surface.set_document_title(&format!("{} | {}", label, self.site_title));
        surface.set_text(Region::PostTitle, label)?;
        let back = (INDEX_PAGE, self.locale.back_to_list.as_str());
        surface.set_html(Region::PostContent, &error_block(message, Some(back)))
    }
}
