//! Show one item with its navigation neighbors

use anyhow::Result;
use std::io::Write;

use crate::content::ContentKind;
use crate::routes;
use crate::Blog;

/// Print an item's metadata, or its props as JSON
pub fn run(blog: &Blog, kind: ContentKind, slug: &str, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    write_item(blog, kind, slug, json, &mut stdout.lock())
}

pub fn write_item(
    blog: &Blog,
    kind: ContentKind,
    slug: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let index = blog.load(kind)?;
    let props = routes::item_props(&index, slug)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &props)?;
        writeln!(out)?;
        return Ok(());
    }

    let item = props.item;
    writeln!(out, "{}", item.title)?;
    writeln!(out, "  route:     {}", routes::url_for(&blog.config, &item.route()))?;
    writeln!(out, "  url:       {}", routes::full_url_for(&blog.config, &item.route()))?;
    writeln!(out, "  source:    {}", item.source.display())?;
    writeln!(out, "  published: {}", item.published_at.format("%b %-d, %Y"))?;
    if item.is_edited() {
        writeln!(out, "  edited:    {}", item.updated_at.format("%b %-d, %Y"))?;
    }
    if !item.tags.is_empty() {
        writeln!(out, "  tags:      {}", item.tags.join(", "))?;
    }
    writeln!(
        out,
        "  length:    {} words, {} min read",
        item.word_count, item.reading_time
    )?;
    if !item.excerpt.is_empty() {
        writeln!(out, "  excerpt:   {}", item.excerpt)?;
    }
    if let Some(prev) = props.prev {
        writeln!(out, "  prev:      {} [{}]", prev.title, prev.slug)?;
    }
    if let Some(next) = props.next {
        writeln!(out, "  next:      {} [{}]", next.title, next.slug)?;
    }

    Ok(())
}
