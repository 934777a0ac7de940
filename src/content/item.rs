//! Content item model

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The kinds of content a site carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Tip,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Article, ContentKind::Tip];

    /// Singular name, as used in messages and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Tip => "tip",
        }
    }

    /// First path segment of the item's route
    pub fn route_prefix(self) -> &'static str {
        match self {
            ContentKind::Article => "articles",
            ContentKind::Tip => "tips",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" | "articles" => Ok(ContentKind::Article),
            "tip" | "tips" => Ok(ContentKind::Tip),
            other => Err(format!("unknown content kind: {} (expected article or tip)", other)),
        }
    }
}

/// A single article or tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub kind: ContentKind,

    /// Unique (per kind) identifier used in the item's address
    pub slug: String,

    pub title: String,

    /// Summary shown in listings and metadata
    pub excerpt: String,

    pub published_at: DateTime<FixedOffset>,

    /// Equal to `published_at` unless the item was edited later
    pub updated_at: DateTime<FixedOffset>,

    /// Tags in front-matter order, deduplicated
    pub tags: Vec<String>,

    /// Markdown body, front-matter and excerpt marker removed
    pub content: String,

    /// Source file text as read from disk
    pub raw_body: String,

    /// Source path relative to the content directory
    pub source: PathBuf,

    /// Order in which the loader encountered the file
    pub position: usize,

    pub word_count: usize,

    /// Estimated reading time in minutes
    pub reading_time: usize,
}

impl ContentItem {
    /// Whether the item was updated after it was published
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.published_at
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Route of this item, e.g. `/articles/hello-world`
    pub fn route(&self) -> String {
        crate::routes::item_path(self.kind, &self.slug)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::article;
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("articles".parse::<ContentKind>(), Ok(ContentKind::Article));
        assert_eq!("tip".parse::<ContentKind>(), Ok(ContentKind::Tip));
        assert!("page".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_is_edited() {
        let mut item = article("a", "2024-03-01", &[], 0);
        assert!(!item.is_edited());
        item.updated_at = item.published_at + chrono::Duration::days(2);
        assert!(item.is_edited());
    }

    #[test]
    fn test_has_tag_is_exact() {
        let item = article("a", "2024-03-01", &["Rust", "go"], 0);
        assert!(item.has_tag("go"));
        assert!(!item.has_tag("rust"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let item = article("hello", "2024-03-01", &["go"], 0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "article");
        assert_eq!(json["publishedAt"], "2024-03-01T00:00:00+00:00");
        assert!(json.get("rawBody").is_some());
        assert_eq!(item.route(), "/articles/hello");
    }
}
