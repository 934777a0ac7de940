//! Props handed to the presentation layer, one per route

use serde::Serialize;

use crate::content::{ContentError, ContentIndex, ContentItem, Result};

/// Props of the home page
#[derive(Debug, Serialize)]
pub struct IndexProps<'a> {
    pub articles: &'a [ContentItem],
}

/// Props of a tag listing page
#[derive(Debug, Serialize)]
pub struct TagProps<'a> {
    pub tag: &'a str,
    /// Every tag in use, for the "more tags" list
    pub tags: Vec<&'a str>,
    pub articles: Vec<&'a ContentItem>,
}

/// Props of an article or tip page
#[derive(Debug, Serialize)]
pub struct ItemProps<'a> {
    pub item: &'a ContentItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a ContentItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a ContentItem>,
}

pub fn index_props(articles: &ContentIndex) -> IndexProps<'_> {
    IndexProps {
        articles: articles.items(),
    }
}

/// Props for `tag`; `NotFound` when no article uses it
pub fn tag_props<'a>(articles: &'a ContentIndex, tag: &'a str) -> Result<TagProps<'a>> {
    let listed = articles.list_by_tag(tag);
    if listed.is_empty() {
        return Err(ContentError::not_found("tag", tag));
    }

    Ok(TagProps {
        tag,
        tags: articles.list_all_tags(),
        articles: listed,
    })
}

/// Props for the item with `slug`, with its chronological neighbors
pub fn item_props<'a>(index: &'a ContentIndex, slug: &str) -> Result<ItemProps<'a>> {
    let item = index.get_by_slug(slug)?;
    let neighbors = index.resolve_neighbors(item)?;

    Ok(ItemProps {
        item,
        prev: neighbors.prev,
        next: neighbors.next,
    })
}
