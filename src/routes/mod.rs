//! Routes - static paths and the props each route receives

mod props;
mod url;

pub use props::{index_props, item_props, tag_props, IndexProps, ItemProps, TagProps};
pub use url::{encode_segment, full_url_for, item_path, tag_path, url_for};

use crate::content::ContentIndex;

/// Paths of every item page of a collection, newest first
pub fn item_paths(index: &ContentIndex) -> Vec<String> {
    index
        .items()
        .iter()
        .map(|item| item_path(item.kind, &item.slug))
        .collect()
}

/// Paths of every tag page
pub fn tag_paths(articles: &ContentIndex) -> Vec<String> {
    articles
        .list_all_tags()
        .into_iter()
        .map(tag_path)
        .collect()
}
