//! Page controllers
//!
//! Each page load runs one controller through `Loading -> Ready` or
//! `Loading -> Failed`. A failed page stays failed; the reader retries by
//! reloading, which builds a fresh controller.

mod list;
mod post;
pub mod surface;

pub use list::ListPage;
pub use post::PostPage;
pub use surface::{HtmlSurface, PageKind, Region, Surface, SurfaceError};

use crate::error::LoadError;

/// Where a page load stands
#[derive(Debug)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(LoadError),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            PageState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Hand back the failure, if the page ended in one
    pub fn into_error(self) -> Option<LoadError> {
        match self {
            PageState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// A finished page and how its load went
#[derive(Debug)]
pub struct RenderedPage {
    pub html: String,
    pub error: Option<LoadError>,
}
