use std::path::Path;

use anyhow::{Context, bail};
use lens_core::slug::{is_valid_slug, slugify};
use lens_core::{IndexEntry, Localized, PaperIndex, Summary};
use serde::Serialize;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::output;

/// A paper to scaffold.
#[derive(Debug, Clone)]
pub struct NewPaper {
    pub slug: String,
    pub title_en: String,
    pub title_zh: String,
    pub arxiv_id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddResponse {
    pub slug: String,
    pub paper_path: String,
    pub index_path: String,
    pub updated: String,
}

/// Handle `lens add`.
pub fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.config.content.is_remote() {
        tracing::warn!(
            base_url = %ctx.config.content.base_url,
            "content.base_url is set; scaffolding into the local data directory anyway"
        );
    }

    let slug = args
        .slug
        .clone()
        .unwrap_or_else(|| slugify(&args.title_en));
    let paper = NewPaper {
        slug,
        title_en: args.title_en.clone(),
        title_zh: args.title_zh.clone(),
        arxiv_id: args.arxiv.clone().unwrap_or_default(),
    };
    let today = chrono::Utc::now().date_naive().to_string();

    let response = scaffold(&ctx.config.content.data_path(), &paper, &today)?;
    tracing::info!(slug = %response.slug, path = %response.paper_path, "added paper");
    output(&response, flags.format)
}

/// Write `papers/<slug>.json` from the template and prepend a stub entry to
/// `papers.json`, setting `updated` to `today`.
///
/// Refuses a slug that already has a paper file or an index entry; nothing is
/// written in that case.
pub fn scaffold(data_dir: &Path, paper: &NewPaper, today: &str) -> anyhow::Result<AddResponse> {
    if !is_valid_slug(&paper.slug) {
        bail!(
            "invalid slug '{}': use lowercase letters, digits, and dashes",
            paper.slug
        );
    }

    let index_path = data_dir.join("papers.json");
    let papers_dir = data_dir.join("papers");
    let paper_path = papers_dir.join(format!("{}.json", paper.slug));

    if paper_path.exists() {
        bail!("paper already exists: {}", paper_path.display());
    }

    let raw = std::fs::read_to_string(&index_path)
        .with_context(|| format!("failed to read {}", index_path.display()))?;
    let mut index: PaperIndex = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", index_path.display()))?;

    index
        .prepend(index_entry(paper))
        .with_context(|| format!("cannot add '{}'", paper.slug))?;
    index.updated = today.to_string();

    std::fs::create_dir_all(&papers_dir)
        .with_context(|| format!("failed to create {}", papers_dir.display()))?;
    write_paper_and_index(&paper_path, &template(paper), &index_path, &index)?;

    Ok(AddResponse {
        slug: paper.slug.clone(),
        paper_path: paper_path.display().to_string(),
        index_path: index_path.display().to_string(),
        updated: index.updated,
    })
}

/// Write the paper file, then the index. A failed index write removes the
/// paper file again so the slug can be retried.
fn write_paper_and_index(
    paper_path: &Path,
    paper: &serde_json::Value,
    index_path: &Path,
    index: &PaperIndex,
) -> anyhow::Result<()> {
    write_json(paper_path, paper)?;
    if let Err(error) = write_json(index_path, index) {
        if let Err(cleanup) = std::fs::remove_file(paper_path) {
            tracing::warn!(path = %paper_path.display(), %cleanup, "failed to remove scaffolded paper");
        }
        return Err(error);
    }
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn template_summary() -> Summary {
    Summary {
        hs: Localized::new(
            String::from("High school summary."),
            String::from("高中版摘要。"),
        ),
        grad: Localized::new(
            String::from("Graduate summary."),
            String::from("研究生版摘要。"),
        ),
    }
}

fn index_entry(paper: &NewPaper) -> IndexEntry {
    IndexEntry {
        slug: paper.slug.clone(),
        title: Localized::new(paper.title_en.clone(), paper.title_zh.clone()),
        summary: template_summary(),
        arxiv_id: Some(paper.arxiv_id.clone()).filter(|id| !id.trim().is_empty()),
        date: None,
        tags: Vec::new(),
    }
}

/// Paper document with placeholder copy for every field an author fills in.
fn template(paper: &NewPaper) -> serde_json::Value {
    json!({
        "slug": paper.slug,
        "title": {"en": paper.title_en, "zh": paper.title_zh},
        "subtitle": {"en": "Subtitle", "zh": "副标题"},
        "summary": template_summary(),
        "authors": [],
        "arxivId": paper.arxiv_id,
        "date": "",
        "venue": "",
        "tags": [],
        "links": {"arXiv": "", "PDF": "", "Project": "", "Code": ""},
        "sections": [
            {
                "id": "overview",
                "title": {"en": "Overview", "zh": "概览"},
                "blocks": [
                    {"level": "hs", "type": "text", "text": {"en": "Add HS explanation.", "zh": "添加高中版说明。"}},
                    {"level": "grad", "type": "text", "text": {"en": "Add grad explanation.", "zh": "添加研究生版说明。"}}
                ]
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_core::{BlockBody, Level, PaperDocument};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn data_dir() -> TempDir {
        let tmp = TempDir::new().expect("tmp dir");
        std::fs::write(
            tmp.path().join("papers.json"),
            r#"{"updated": "2025-01-01", "papers": [{"slug": "existing", "title": {"en": "Existing"}}]}"#,
        )
        .unwrap();
        tmp
    }

    fn new_paper(slug: &str) -> NewPaper {
        NewPaper {
            slug: slug.to_string(),
            title_en: "Sparse Attention".to_string(),
            title_zh: "稀疏注意力".to_string(),
            arxiv_id: "2401.00001".to_string(),
        }
    }

    #[test]
    fn scaffold_writes_paper_and_prepends_entry() {
        let tmp = data_dir();
        let response = scaffold(tmp.path(), &new_paper("sparse-attention"), "2026-10-16").unwrap();
        assert_eq!(response.updated, "2026-10-16");

        let index: PaperIndex =
            serde_json::from_str(&std::fs::read_to_string(tmp.path().join("papers.json")).unwrap())
                .unwrap();
        let slugs: Vec<&str> = index.papers.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["sparse-attention", "existing"]);
        assert_eq!(index.updated, "2026-10-16");
        assert_eq!(index.papers[0].arxiv_id.as_deref(), Some("2401.00001"));
    }

    #[test]
    fn scaffolded_paper_reads_back() {
        let tmp = data_dir();
        scaffold(tmp.path(), &new_paper("sparse-attention"), "2026-10-16").unwrap();

        let raw =
            std::fs::read_to_string(tmp.path().join("papers").join("sparse-attention.json")).unwrap();
        let paper: PaperDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(paper.title.text(lens_core::Lang::Zh), "稀疏注意力");
        assert_eq!(paper.venue, None);
        assert_eq!(paper.links.len(), 4);
        assert_eq!(paper.links.non_empty().count(), 0);

        let blocks = &paper.sections[0].blocks;
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].level, Level::Grad);
        assert!(matches!(blocks[0].body, BlockBody::Text(_)));
    }

    #[test]
    fn existing_paper_file_is_refused() {
        let tmp = data_dir();
        scaffold(tmp.path(), &new_paper("sparse-attention"), "2026-10-16").unwrap();
        let err = scaffold(tmp.path(), &new_paper("sparse-attention"), "2026-10-17").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn slug_already_indexed_is_refused_without_writing() {
        let tmp = data_dir();
        let err = scaffold(tmp.path(), &new_paper("existing"), "2026-10-16").unwrap_err();
        assert!(format!("{err:#}").contains("slug already in index"));
        assert!(!tmp.path().join("papers").join("existing.json").exists());

        let raw = std::fs::read_to_string(tmp.path().join("papers.json")).unwrap();
        assert!(raw.contains("2025-01-01"));
    }

    #[test]
    fn failed_index_write_leaves_no_paper_file() {
        let tmp = data_dir();
        let paper = new_paper("sparse-attention");
        let paper_path = tmp.path().join("sparse-attention.json");
        let index_path = tmp.path().join("missing").join("papers.json");

        let result = write_paper_and_index(
            &paper_path,
            &template(&paper),
            &index_path,
            &PaperIndex::default(),
        );
        assert!(result.is_err());
        assert!(!paper_path.exists());

        scaffold(tmp.path(), &paper, "2026-10-16").unwrap();
    }

    #[test]
    fn invalid_slug_is_refused() {
        let tmp = data_dir();
        assert!(scaffold(tmp.path(), &new_paper("../escape"), "2026-10-16").is_err());
    }

    #[test]
    fn blank_arxiv_id_is_absent_in_index() {
        let tmp = data_dir();
        let paper = NewPaper {
            arxiv_id: String::new(),
            ..new_paper("no-arxiv")
        };
        scaffold(tmp.path(), &paper, "2026-10-16").unwrap();
        let raw = std::fs::read_to_string(tmp.path().join("papers.json")).unwrap();
        let index: PaperIndex = serde_json::from_str(&raw).unwrap();
        assert_eq!(index.papers[0].arxiv_id, None);
    }
}
