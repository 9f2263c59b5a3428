//! Content module - post index, post documents and their parsing

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, FALLBACK_TITLE};
pub use loader::{IndexLoader, PostLoader};
pub use markdown::MarkdownRenderer;
pub use post::{PostDocument, PostSummary};
