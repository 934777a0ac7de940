//! Route paths and URL helpers

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;
use crate::content::ContentKind;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode one path segment (a slug or a tag)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Route of an item, e.g. `/tips/borrow-checker`
pub fn item_path(kind: ContentKind, slug: &str) -> String {
    format!("/{}/{}", kind.route_prefix(), encode_segment(slug))
}

/// Route of a tag listing, e.g. `/tags/rust`
pub fn tag_path(tag: &str) -> String {
    format!("/tags/{}", encode_segment(tag))
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/articles/hello") // -> "/blog/articles/hello"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}
