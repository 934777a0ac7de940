//! Content loader - loads articles and tips from the content directory

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::frontmatter::{parse_date_string, FrontMatter};
use super::index::ContentIndex;
use super::item::{ContentItem, ContentKind};
use super::markdown;
use crate::config::SiteConfig;

/// Loads content collections from a content directory
pub struct ContentLoader {
    content_dir: PathBuf,
    config: SiteConfig,
    skip: Vec<glob::Pattern>,
    tz: Option<Tz>,
}

impl ContentLoader {
    /// Create a loader for `content_dir` using the site configuration.
    ///
    /// Fails if the config carries an invalid timezone or skip pattern.
    pub fn new(content_dir: impl Into<PathBuf>, config: &SiteConfig) -> anyhow::Result<Self> {
        let skip = config
            .skip
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            content_dir: content_dir.into(),
            config: config.clone(),
            skip,
            tz: config.tz()?,
        })
    }

    /// Directory holding the sources of `kind`
    pub fn source_dir(&self, kind: ContentKind) -> PathBuf {
        self.content_dir.join(self.config.dir_for(kind))
    }

    /// Load every source file of `kind` and index it.
    ///
    /// The first malformed file aborts the load. A missing directory is an
    /// empty collection.
    pub fn load_all(&self, kind: ContentKind) -> Result<ContentIndex> {
        let dir = self.source_dir(kind);
        if !dir.exists() {
            tracing::debug!("No {} directory at {:?}", kind, dir);
            return ContentIndex::build(kind, Vec::new());
        }

        let mut items = Vec::new();

        // Sorted walk so encounter order (the date tie-break) is reproducible
        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                ContentError::io(path, source)
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) || self.is_skipped(path) {
                continue;
            }

            let item = self.load_item(kind, path, items.len())?;
            tracing::debug!("Loaded {} {:?} from {:?}", kind, item.slug, item.source);
            items.push(item);
        }

        let index = ContentIndex::build(kind, items)?;
        tracing::info!("Loaded {} {}(s)", index.len(), kind);
        Ok(index)
    }

    /// Load a single item from a file
    pub fn load_item(&self, kind: ContentKind, path: &Path, position: usize) -> Result<ContentItem> {
        let raw_body = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let source = self.relative(path);

        let (fm, body) = FrontMatter::parse(&raw_body, &source)?;

        let title = required(fm.title, "title", &source)?;
        let slug = required(fm.slug, "slug", &source)?;
        if slug.contains('/') || slug.chars().any(char::is_whitespace) {
            return Err(ContentError::parse(
                &source,
                format!("slug {:?} must not contain '/' or whitespace", slug),
            ));
        }
        if slug == "." || slug == ".." {
            return Err(ContentError::parse(
                &source,
                format!("slug {:?} is not a valid route segment", slug),
            ));
        }
        if slug::slugify(&slug) != slug {
            tracing::warn!("Slug {:?} in {:?} is not URL-normalized", slug, source);
        }

        let published_raw = required(fm.published_at, "publishedAt", &source)?;
        let published_at = self.date(&published_raw, "publishedAt", &source)?;
        let updated_at = match fm.updated_at {
            Some(raw) => self.date(&raw, "updatedAt", &source)?,
            None => published_at,
        };
        if updated_at < published_at {
            return Err(ContentError::parse(
                &source,
                format!(
                    "updatedAt ({}) is earlier than publishedAt ({})",
                    updated_at.to_rfc3339(),
                    published_at.to_rfc3339()
                ),
            ));
        }

        let (excerpt_md, content) = markdown::split_excerpt(body);
        let excerpt = fm
            .excerpt
            .map(|e| e.trim().to_string())
            .or_else(|| excerpt_md.map(|e| markdown::plain_text(&e)))
            .unwrap_or_default();

        let mut tags: Vec<String> = Vec::with_capacity(fm.tags.len());
        for tag in fm.tags {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        let word_count = markdown::count_words(&markdown::plain_text(&content));

        Ok(ContentItem {
            kind,
            slug,
            title,
            excerpt,
            published_at,
            updated_at,
            tags,
            content,
            raw_body,
            source,
            position,
            word_count,
            reading_time: markdown::reading_time(word_count, self.config.words_per_minute),
        })
    }

    fn date(&self, raw: &str, field: &str, source: &Path) -> Result<DateTime<FixedOffset>> {
        parse_date_string(raw, self.tz).ok_or_else(|| {
            ContentError::parse(source, format!("invalid `{}` date: {:?}", field, raw))
        })
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.content_dir)
            .unwrap_or(path)
            .to_path_buf()
    }

    fn is_skipped(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        self.skip.iter().any(|p| p.matches_path(&relative))
    }
}

fn required(value: Option<String>, field: &str, source: &Path) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ContentError::parse(
            source,
            format!("missing required field `{}`", field),
        )),
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
