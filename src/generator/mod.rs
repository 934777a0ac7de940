//! Generator module - writes the props of every route as JSON documents

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Component, PathBuf};

use crate::routes;
use crate::{Blog, Site};

/// Name of the route manifest written at the public root
pub const ROUTES_FILE: &str = "routes.json";

/// One rendered output document
#[derive(Debug)]
struct Output {
    /// Path relative to the public directory
    path: PathBuf,
    body: String,
}

/// Route manifest, the equivalent of the static path lists
#[derive(Debug, Serialize)]
struct RouteManifest {
    index: String,
    articles: Vec<String>,
    tips: Vec<String>,
    tags: Vec<String>,
}

/// What a generation run produced
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateStats {
    pub articles: usize,
    pub tips: usize,
    pub tags: usize,
    pub files: usize,
}

/// Writes route props for a loaded site
pub struct Generator<'a> {
    blog: &'a Blog,
}

impl<'a> Generator<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Render every document, then replace the public directory with them.
    ///
    /// Nothing is written unless every document rendered.
    pub fn generate(&self, site: &Site) -> Result<GenerateStats> {
        let outputs = self.render(site)?;

        let public_dir = &self.blog.public_dir;
        if public_dir.exists() {
            fs::remove_dir_all(public_dir)
                .with_context(|| format!("Failed to clear {:?}", public_dir))?;
        }

        for output in &outputs {
            let output_path = public_dir.join(&output.path);
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {:?}", parent))?;
            }
            fs::write(&output_path, &output.body)
                .with_context(|| format!("Failed to write {:?}", output_path))?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        Ok(GenerateStats {
            articles: site.articles.len(),
            tips: site.tips.len(),
            tags: site.articles.list_all_tags().len(),
            files: outputs.len(),
        })
    }

    fn render(&self, site: &Site) -> Result<Vec<Output>> {
        let mut outputs = Vec::new();

        outputs.push(self.output("/", &routes::index_props(&site.articles))?);

        let tag_paths = routes::tag_paths(&site.articles);
        for tag in site.articles.list_all_tags() {
            let props = routes::tag_props(&site.articles, tag)?;
            outputs.push(self.output(&routes::tag_path(tag), &props)?);
        }

        for index in [&site.articles, &site.tips] {
            for item in index.items() {
                let props = routes::item_props(index, &item.slug)?;
                outputs.push(self.output(&item.route(), &props)?);
            }
        }

        let manifest = RouteManifest {
            index: routes::url_for(&self.blog.config, "/"),
            articles: prefixed(self.blog, routes::item_paths(&site.articles)),
            tips: prefixed(self.blog, routes::item_paths(&site.tips)),
            tags: prefixed(self.blog, tag_paths),
        };
        outputs.push(Output {
            path: PathBuf::from(ROUTES_FILE),
            body: self.to_json(&manifest)?,
        });

        Ok(outputs)
    }

    /// Props document for `route`, stored at `<route>/index.json`.
    ///
    /// Routes with a `.` or `..` segment are rejected.
    fn output<T: Serialize>(&self, route: &str, props: &T) -> Result<Output> {
        let relative = route.trim_start_matches('/');
        let path = PathBuf::from(relative).join("index.json");

        // `Path::components` drops inner `.` segments, so check the raw ones too
        let dotted = relative.split('/').any(|s| s == "." || s == "..");
        if dotted || path.components().any(|c| !matches!(c, Component::Normal(_))) {
            anyhow::bail!("Route {:?} leaves its output directory", route);
        }

        Ok(Output {
            path,
            body: self.to_json(props)?,
        })
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.blog.config.pretty_json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

fn prefixed(blog: &Blog, paths: Vec<String>) -> Vec<String> {
    paths
        .iter()
        .map(|p| routes::url_for(&blog.config, p))
        .collect()
}
