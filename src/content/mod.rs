//! Content module - loads articles and tips and indexes them

mod error;
mod frontmatter;
mod index;
mod item;
pub mod loader;
pub mod markdown;

pub use error::{ContentError, Result};
pub use frontmatter::{parse_date_string, FrontMatter};
pub use index::{ContentIndex, Neighbors};
pub use item::{ContentItem, ContentKind};
pub use loader::ContentLoader;
