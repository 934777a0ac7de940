//! Site configuration (_config.yml / _config.toml)

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::ContentKind;

/// Config file names looked up at the site root, in order
pub const CONFIG_FILES: [&str; 2] = ["_config.yml", "_config.toml"];

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    /// IANA timezone used for front-matter dates without an offset
    pub timezone: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub article_dir: String,
    pub tip_dir: String,
    /// Glob patterns (relative to the content dir) excluded from loading
    #[serde(default)]
    pub skip: Vec<String>,

    // Writing
    pub words_per_minute: usize,

    // Output
    pub pretty_json: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),
            timezone: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            article_dir: "articles".to_string(),
            tip_dir: "tips".to_string(),
            skip: Vec::new(),

            words_per_minute: 200,

            pretty_json: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, picking the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;

        let config: SiteConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config {:?}", path))?,
            _ => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config {:?}", path))?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Find the config file in a site directory, if any
    pub fn locate(base_dir: &Path) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| base_dir.join(name))
            .find(|p| p.exists())
    }

    /// Reject settings that would only fail later, mid-build
    pub fn validate(&self) -> Result<()> {
        self.tz()?;
        if self.words_per_minute == 0 {
            anyhow::bail!("words_per_minute must be greater than zero");
        }
        for pattern in &self.skip {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid skip pattern: {}", pattern))?;
        }
        Ok(())
    }

    /// Configured timezone, `None` meaning UTC
    pub fn tz(&self) -> Result<Option<Tz>> {
        let name = self.timezone.trim();
        if name.is_empty() {
            return Ok(None);
        }
        name.parse::<Tz>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid timezone {:?}: {}", name, e))
    }

    /// Source directory name for a content kind
    pub fn dir_for(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Article => &self.article_dir,
            ContentKind::Tip => &self.tip_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.dir_for(ContentKind::Article), "articles");
        assert_eq!(config.dir_for(ContentKind::Tip), "tips");
        assert_eq!(config.words_per_minute, 200);
        assert!(config.tz().unwrap().is_none());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
title: Dev Notes
timezone: Asia/Tokyo
tip_dir: snippets
skip:
  - "**/_*.md"
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Dev Notes");
        assert_eq!(config.dir_for(ContentKind::Tip), "snippets");
        assert_eq!(config.tz().unwrap(), Some(chrono_tz::Asia::Tokyo));
        assert_eq!(config.public_dir, "public");
        config.validate().unwrap();
    }

    #[test]
    fn test_load_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.toml");
        fs::write(&path, "title = \"Toml Blog\"\nwords_per_minute = 250\n").unwrap();

        assert_eq!(SiteConfig::locate(dir.path()), Some(path.clone()));
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Toml Blog");
        assert_eq!(config.words_per_minute, 250);
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let config = SiteConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_skip_pattern_rejected() {
        let config = SiteConfig {
            skip: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
