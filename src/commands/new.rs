//! Create a new article or tip

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentKind;
use crate::Blog;

/// Scaffold a source file for `title`, returning its path.
///
/// The slug defaults to the slugified title.
pub fn create_item(
    blog: &Blog,
    kind: ContentKind,
    title: &str,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let slug = slug
        .map(str::to_string)
        .unwrap_or_else(|| slug::slugify(title));
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let target_dir = blog.content_dir.join(blog.config.dir_for(kind));
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let summary_key = match kind {
        ContentKind::Article => "excerpt",
        ContentKind::Tip => "description",
    };
    let now = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%:z");

    let content = format!(
        "---\ntitle: {title}\nslug: {slug}\n{summary_key}: ''\npublishedAt: {now}\ntags: []\n---\n\n",
        title = serde_yaml::to_string(title)?.trim_end(),
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created {} {:?}", kind, file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;

    #[test]
    fn test_created_item_loads() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let path = create_item(&blog, ContentKind::Tip, "Borrow: the checker", None).unwrap();
        assert!(path.ends_with("tips/borrow-the-checker.md"));

        let loader = ContentLoader::new(&blog.content_dir, &blog.config).unwrap();
        let index = loader.load_all(ContentKind::Tip).unwrap();
        let item = index.get_by_slug("borrow-the-checker").unwrap();
        assert_eq!(item.title, "Borrow: the checker");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        create_item(&blog, ContentKind::Article, "Hello", Some("hello")).unwrap();
        let err = create_item(&blog, ContentKind::Article, "Hello again", Some("hello")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_empty_slug_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(create_item(&blog, ContentKind::Article, "!!!", None).is_err());
    }
}
