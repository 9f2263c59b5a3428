//! Helper functions for rendering pages
//!
//! Date formatting, URL building, HTML escaping, and the post list
//! renderer with its search filter.

mod date;
mod html;
mod list;
mod url;

pub use date::*;
pub use html::*;
pub use list::*;
pub use url::*;
