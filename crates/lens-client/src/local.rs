//! Local directory content source.
//!
//! Reads the same layout the site serves under `/data`: `papers.json` and
//! `papers/<slug>.json`.

use std::io;
use std::path::{Path, PathBuf};

use lens_core::{PaperDocument, PaperIndex};

use crate::error::ContentError;
use crate::{ContentSource, decode_index, decode_paper};

#[derive(Debug, Clone)]
pub struct DirContentSource {
    root: PathBuf,
}

impl DirContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.root.join("papers.json")
    }

    #[must_use]
    pub fn paper_path(&self, slug: &str) -> PathBuf {
        self.root.join("papers").join(format!("{slug}.json"))
    }
}

/// A slug must name exactly one file inside `papers/`.
fn is_single_component(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.contains('\0')
}

impl ContentSource for DirContentSource {
    async fn fetch_index(&self) -> Result<PaperIndex, ContentError> {
        let path = self.index_path();
        tracing::debug!(path = %path.display(), "reading paper index");
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?;
        decode_index(&bytes, &path.display().to_string())
    }

    async fn fetch_paper(&self, slug: &str) -> Result<PaperDocument, ContentError> {
        if !is_single_component(slug) {
            return Err(ContentError::NotFound {
                slug: slug.to_string(),
            });
        }
        let path = self.paper_path(slug);
        tracing::debug!(path = %path.display(), slug, "reading paper");
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound {
                    slug: slug.to_string(),
                });
            }
            Err(source) => return Err(ContentError::Io { path, source }),
        };
        decode_paper(&bytes, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "papers.json",
            r#"{"updated": "2026-10-01", "papers": [{"slug": "a", "title": {"en": "Attention"}}]}"#,
        );
        write(
            dir.path(),
            "papers/a.json",
            r#"{"slug": "a", "title": {"en": "Attention"}, "sections": []}"#,
        );
        dir
    }

    #[tokio::test]
    async fn reads_index_and_paper() {
        let dir = fixture();
        let source = DirContentSource::new(dir.path());

        let index = source.fetch_index().await.unwrap();
        assert_eq!(index.updated, "2026-10-01");
        assert_eq!(index.papers[0].slug, "a");

        let paper = source.fetch_paper("a").await.unwrap();
        assert_eq!(paper.title.en.as_deref(), Some("Attention"));
    }

    #[tokio::test]
    async fn missing_paper_is_not_found() {
        let dir = fixture();
        let source = DirContentSource::new(dir.path());
        let err = source.fetch_paper("missing-slug").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[rstest]
    #[case("")]
    #[case("..")]
    #[case("../papers")]
    #[case("a/b")]
    #[tokio::test]
    async fn path_like_slugs_are_not_found(#[case] slug: &str) {
        let dir = fixture();
        let source = DirContentSource::new(dir.path());
        let err = source.fetch_paper(slug).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn missing_index_is_transport_class() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirContentSource::new(dir.path());
        let err = source.fetch_index().await.unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn malformed_paper_is_decode_error() {
        let dir = fixture();
        write(dir.path(), "papers/broken.json", "{not json");
        let source = DirContentSource::new(dir.path());
        let err = source.fetch_paper("broken").await.unwrap_err();
        assert!(matches!(err, ContentError::Decode { .. }));
    }
}
