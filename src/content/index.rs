//! In-memory index over one content collection
//!
//! Items are ordered newest first by `published_at`; items published at the
//! same instant keep the order the loader encountered them in. That single
//! order drives listings, tag listings and prev/next navigation.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashMap;

use super::error::{ContentError, Result};
use super::item::{ContentItem, ContentKind};

/// Chronological neighbors of an item
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Neighbors<'a> {
    /// The next older item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a ContentItem>,
    /// The next newer item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a ContentItem>,
}

/// Read-only index of one kind of content
#[derive(Debug, Clone)]
pub struct ContentIndex {
    kind: ContentKind,
    items: Vec<ContentItem>,
    by_slug: HashMap<String, usize>,
}

impl ContentIndex {
    /// Build the index, sorting the items and rejecting duplicate slugs
    pub fn build(kind: ContentKind, mut items: Vec<ContentItem>) -> Result<Self> {
        items.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(a.position.cmp(&b.position))
        });

        let mut by_slug = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if let Some(&first) = by_slug.get(&item.slug) {
                let first: &ContentItem = &items[first];
                // Report in encounter order
                let (first, second) = if first.position <= item.position {
                    (first, item)
                } else {
                    (item, first)
                };
                return Err(ContentError::DuplicateSlug {
                    slug: item.slug.clone(),
                    first: first.source.clone(),
                    second: second.source.clone(),
                });
            }
            by_slug.insert(item.slug.clone(), i);
        }

        tracing::debug!("Indexed {} {} item(s)", items.len(), kind);

        Ok(Self {
            kind,
            items,
            by_slug,
        })
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// All items, newest first
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact, case-sensitive slug lookup
    pub fn get_by_slug(&self, slug: &str) -> Result<&ContentItem> {
        self.by_slug
            .get(slug)
            .map(|&i| &self.items[i])
            .ok_or_else(|| ContentError::not_found(self.kind.name(), slug))
    }

    /// Items carrying `tag`, newest first. Empty when nothing matches.
    pub fn list_by_tag(&self, tag: &str) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.has_tag(tag)).collect()
    }

    /// Distinct tags, in order of first appearance
    pub fn list_all_tags(&self) -> Vec<&str> {
        let tags: IndexSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().collect()
    }

    /// Tag to items view, rebuilt on every call
    pub fn tag_index(&self) -> IndexMap<&str, Vec<&ContentItem>> {
        let mut index: IndexMap<&str, Vec<&ContentItem>> = IndexMap::new();
        for item in &self.items {
            for tag in &item.tags {
                index.entry(tag.as_str()).or_default().push(item);
            }
        }
        index
    }

    /// Tags with the number of items using them, most used first
    pub fn tag_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<_> = self
            .tag_index()
            .into_iter()
            .map(|(tag, items)| (tag, items.len()))
            .collect();
        // Stable: equal counts keep first-appearance order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Older (`prev`) and newer (`next`) neighbors of `item`
    pub fn resolve_neighbors(&self, item: &ContentItem) -> Result<Neighbors<'_>> {
        let pos = self
            .by_slug
            .get(&item.slug)
            .copied()
            .filter(|&i| self.items[i].source == item.source)
            .ok_or_else(|| ContentError::not_found(self.kind.name(), item.slug.as_str()))?;

        Ok(Neighbors {
            prev: self.items.get(pos + 1),
            next: pos.checked_sub(1).map(|i| &self.items[i]),
        })
    }
}
