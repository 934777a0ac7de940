//! End-to-end: a small blog on disk through load and generate

use std::fs;
use std::path::Path;

use blogdex::content::{ContentError, ContentKind};
use blogdex::Blog;
use tempfile::TempDir;

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(root, "_config.yml", "title: Test Blog\ntimezone: Europe/Paris\n");

    write(
        root,
        "content/articles/a.md",
        r#"---
title: Article A
slug: a
excerpt: The newest one
publishedAt: 2024-03-01
updatedAt: 2024-03-05
tags:
  - go
  - rust
---

# A

Newest article.
"#,
    );
    write(
        root,
        "content/articles/b.md",
        r#"---
title: Article B
slug: b
publishedAt: 2024-02-01
tags: go
---

Intro of B.

<!-- more -->

Rest of B.
"#,
    );
    write(
        root,
        "content/articles/c.md",
        r#"{"title": "Article C", "slug": "c", "publishedAt": "2024-01-01"}

Oldest article.
"#,
    );
    write(
        root,
        "content/tips/t1.md",
        r#"---
title: Tip One
slug: tip-one
description: A tip
publishedAt: 2024-01-10 09:00
tags: [cli]
---
Use the flag.
"#,
    );

    dir
}

#[test]
fn test_load_site() {
    let dir = setup();
    let blog = Blog::new(dir.path()).unwrap();
    assert_eq!(blog.config.title, "Test Blog");

    let site = blog.load_site().unwrap();
    let order: Vec<_> = site.articles.items().iter().map(|i| i.slug.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);

    let a = site.articles.get_by_slug("a").unwrap();
    assert!(a.is_edited());
    assert_eq!(a.excerpt, "The newest one");
    // Naive dates are read in the configured timezone
    assert_eq!(a.published_at.to_rfc3339(), "2024-03-01T00:00:00+01:00");

    let b = site.articles.get_by_slug("b").unwrap();
    assert_eq!(b.excerpt, "Intro of B.");
    assert!(!b.is_edited());

    let n = site.articles.resolve_neighbors(b).unwrap();
    assert_eq!(n.prev.unwrap().slug, "c");
    assert_eq!(n.next.unwrap().slug, "a");

    let tip = site.index(ContentKind::Tip).get_by_slug("tip-one").unwrap();
    assert_eq!(tip.excerpt, "A tip");
    assert_eq!(tip.route(), "/tips/tip-one");
}

#[test]
fn test_generate_props() {
    let dir = setup();
    let blog = Blog::new(dir.path()).unwrap();
    blog.generate().unwrap();

    let public = dir.path().join("public");

    let index = read_json(&public.join("index.json"));
    let slugs: Vec<_> = index["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["a", "b", "c"]);

    let go = read_json(&public.join("tags/go/index.json"));
    assert_eq!(go["tag"], "go");
    assert_eq!(go["articles"].as_array().unwrap().len(), 2);
    assert_eq!(go["tags"], serde_json::json!(["go", "rust"]));

    let b = read_json(&public.join("articles/b/index.json"));
    assert_eq!(b["item"]["title"], "Article B");
    assert_eq!(b["prev"]["slug"], "c");
    assert_eq!(b["next"]["slug"], "a");

    let newest = read_json(&public.join("articles/a/index.json"));
    assert!(newest.get("next").is_none());

    let tip = read_json(&public.join("tips/tip-one/index.json"));
    assert!(tip.get("prev").is_none());
    assert!(tip.get("next").is_none());

    // Tips do not get tag pages
    assert!(!public.join("tags/cli").exists());

    let routes = read_json(&public.join("routes.json"));
    assert_eq!(
        routes["articles"],
        serde_json::json!(["/articles/a", "/articles/b", "/articles/c"])
    );
}

#[test]
fn test_duplicate_slug_aborts_without_output() {
    let dir = setup();
    write(
        dir.path(),
        "content/articles/z.md",
        "---\ntitle: Copy\nslug: a\npublishedAt: 2023-01-01\n---\n",
    );

    let blog = Blog::new(dir.path()).unwrap();
    let err = blog.generate().unwrap_err();
    match err.downcast_ref::<ContentError>() {
        Some(ContentError::DuplicateSlug { slug, .. }) => assert_eq!(slug, "a"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_parse_error_aborts_without_output() {
    let dir = setup();
    write(
        dir.path(),
        "content/tips/broken.md",
        "---\nslug: broken\npublishedAt: 2024-01-01\n---\n",
    );

    let blog = Blog::new(dir.path()).unwrap();
    let err = blog.generate().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ContentError>(),
        Some(ContentError::Parse { .. })
    ));
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_dot_dot_tag_or_slug_aborts_without_output() {
    let dir = setup();
    write(
        dir.path(),
        "content/articles/d.md",
        "---\ntitle: Up\nslug: d\npublishedAt: 2023-01-01\ntags: ['..']\n---\n",
    );
    let blog = Blog::new(dir.path()).unwrap();
    assert!(blog.generate().is_err());
    assert!(!dir.path().join("public").exists());

    write(
        dir.path(),
        "content/articles/d.md",
        "---\ntitle: Up\nslug: '..'\npublishedAt: 2023-01-01\n---\n",
    );
    let err = blog.generate().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ContentError>(),
        Some(ContentError::Parse { .. })
    ));
    assert!(!dir.path().join("public").exists());
}
