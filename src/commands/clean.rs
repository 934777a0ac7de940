//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Remove the generated output
pub fn run(blog: &Blog) -> Result<()> {
    if blog.public_dir.exists() {
        fs::remove_dir_all(&blog.public_dir)?;
        tracing::info!("Deleted: {:?}", blog.public_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", blog.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(blog.public_dir.join("articles")).unwrap();

        run(&blog).unwrap();
        assert!(!blog.public_dir.exists());

        // Second run is a no-op
        run(&blog).unwrap();
    }
}
