//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::{ContentIndex, ContentKind};
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let stdout = std::io::stdout();
    write_listing(blog, content_type, &mut stdout.lock())
}

/// Write the listing for `content_type` to `out`
pub fn write_listing(blog: &Blog, content_type: &str, out: &mut impl Write) -> Result<()> {
    match content_type {
        "tag" | "tags" => {
            let articles = blog.load(ContentKind::Article)?;
            let counts = articles.tag_counts();
            writeln!(out, "Tags ({}):", counts.len())?;
            for (tag, count) in counts {
                writeln!(out, "  {} ({})", tag, count)?;
            }
        }
        other => match other.parse::<ContentKind>() {
            Ok(kind) => write_items(&blog.load(kind)?, out)?,
            Err(_) => anyhow::bail!(
                "Unknown type: {}. Available: article, tip, tag",
                content_type
            ),
        },
    }

    Ok(())
}

fn write_items(index: &ContentIndex, out: &mut impl Write) -> Result<()> {
    let label = match index.kind() {
        ContentKind::Article => "Articles",
        ContentKind::Tip => "Tips",
    };
    writeln!(out, "{} ({}):", label, index.len())?;
    for item in index.items() {
        write!(
            out,
            "  {} - {} [{}]",
            item.published_at.format("%Y-%m-%d"),
            item.title,
            item.slug
        )?;
        if !item.tags.is_empty() {
            write!(out, " #{}", item.tags.join(" #"))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
