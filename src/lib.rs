//! blogdex: content index for a statically generated blog
//!
//! Loads articles and tips from markdown files with front-matter, indexes
//! them by slug and tag, resolves previous/next navigation and writes the
//! props each page route receives as JSON documents.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod routes;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentIndex, ContentKind, ContentLoader};

/// A blog rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (source) directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

/// Both collections of a blog, loaded and indexed
#[derive(Debug, Clone)]
pub struct Site {
    pub articles: ContentIndex,
    pub tips: ContentIndex,
}

impl Site {
    pub fn index(&self, kind: ContentKind) -> &ContentIndex {
        match kind {
            ContentKind::Article => &self.articles,
            ContentKind::Tip => &self.tips,
        }
    }
}

impl Blog {
    /// Open a blog directory, reading `_config.yml` or `_config.toml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let config = match config::SiteConfig::locate(&base_dir) {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                config::SiteConfig::load(&path)?
            }
            None => config::SiteConfig::default(),
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    pub fn loader(&self) -> Result<ContentLoader> {
        ContentLoader::new(&self.content_dir, &self.config)
    }

    /// Load and index one collection
    pub fn load(&self, kind: ContentKind) -> Result<ContentIndex> {
        Ok(self.loader()?.load_all(kind)?)
    }

    /// Load and index every collection
    pub fn load_site(&self) -> Result<Site> {
        let loader = self.loader()?;
        Ok(Site {
            articles: loader.load_all(ContentKind::Article)?,
            tips: loader.load_all(ContentKind::Tip)?,
        })
    }

    /// Write the props of every route
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Scaffold a new article or tip
    pub fn new_item(&self, kind: ContentKind, title: &str) -> Result<PathBuf> {
        commands::new::create_item(self, kind, title, None)
    }
}
