//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

const DEFAULT_CONFIG: &str = r#"# Site
title: My Blog
description: ''
author: ''
timezone: ''

# URL
url: http://example.com
root: /

# Directory
content_dir: content
public_dir: public
article_dir: articles
tip_dir: tips
skip: []

# Writing
words_per_minute: 200

# Output
pretty_json: true
"#;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();

    let content_dir = target_dir.join(&config.content_dir);
    fs::create_dir_all(content_dir.join(&config.article_dir))?;
    fs::create_dir_all(content_dir.join(&config.tip_dir))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::warn!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    tracing::info!("Initialized blog in {:?}", target_dir);
    Ok(())
}
