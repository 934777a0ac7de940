//! Content loading and lookup errors

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while loading or querying content
#[derive(Error, Debug)]
pub enum ContentError {
    /// Malformed or missing front-matter
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Duplicate slug `{slug}` in {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Requested slug or tag has no matching item
    #[error("No {what} matching `{key}`")]
    NotFound { what: &'static str, key: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn not_found(what: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            what,
            key: key.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a lookup miss rather than a broken build
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ContentError::parse("articles/hello.md", "missing `slug`");
        let msg = err.to_string();
        assert!(msg.contains("articles/hello.md"));
        assert!(msg.contains("missing `slug`"));
    }

    #[test]
    fn test_duplicate_slug_message() {
        let err = ContentError::DuplicateSlug {
            slug: "hello".to_string(),
            first: "articles/a.md".into(),
            second: "articles/b.md".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("`hello`"));
        assert!(msg.contains("articles/a.md"));
        assert!(msg.contains("articles/b.md"));
    }

    #[test]
    fn test_not_found() {
        let err = ContentError::not_found("article", "missing");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No article matching `missing`");
        assert!(!ContentError::parse("x.md", "bad").is_not_found());
    }
}
