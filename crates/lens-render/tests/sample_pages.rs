//! Render the bundled sample corpus end to end.

use std::path::PathBuf;

use lens_core::{PaperDocument, PaperIndex};
use lens_render::{Element, Page, View, index_view, paper_view};
use pretty_assertions::assert_eq;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn load_index() -> PaperIndex {
    let raw = std::fs::read_to_string(data_dir().join("papers.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn load_paper(slug: &str) -> PaperDocument {
    let raw = std::fs::read_to_string(data_dir().join("papers").join(format!("{slug}.json")))
        .unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn index_page_lists_every_paper() {
    let index = load_index();
    let mut page = Page::new(lens_core::Lang::En, lens_core::Level::Hs);
    page.commit_index(index_view::render(&index.papers, ""));

    let slugs: Vec<&str> = page
        .cards()
        .into_iter()
        .filter_map(|card| card.get_attr("data-slug"))
        .collect();
    assert_eq!(slugs, vec!["vtp-vectorial-tokenizer", "attention-is-all-you-need"]);
    assert_eq!(page.count_label(), "2 / 2");
}

#[test]
fn vision_search_narrows_sample_index() {
    let index = load_index();
    let render = index_view::render(&index.papers, "vision");
    assert_eq!(render.count_label, "1 / 2");
}

#[test]
fn attention_paper_renders_every_block() {
    let paper = load_paper("attention-is-all-you-need");
    let render = paper_view::render(&paper);

    assert_eq!(render.sections.len(), paper.sections.len());
    let blocks: usize = render
        .sections
        .iter()
        .filter_map(|node| node.as_element())
        .map(|section| section.find_by_class("level").len())
        .sum();
    let expected: usize = paper.sections.iter().map(|s| s.blocks.len()).sum();
    assert_eq!(blocks, expected);

    // Project link is empty in the document and must not be rendered.
    let links = render.meta[0].as_element().unwrap();
    let labels: Vec<String> = links
        .find_all(&|el: &Element| el.tag() == "a")
        .into_iter()
        .map(Element::text_content)
        .collect();
    assert_eq!(labels, vec!["arXiv", "PDF", "Code"]);
}

#[test]
fn unknown_block_leaves_siblings_intact() {
    let paper = load_paper("vtp-vectorial-tokenizer");
    let render = paper_view::render(&paper);
    let section = render.sections[0].as_element().unwrap();
    let blocks: Vec<&Element> = section.child_elements().skip(1).collect();

    assert_eq!(blocks.len(), 3);
    assert!(!blocks[0].child_nodes().is_empty());
    assert!(blocks[1].child_nodes().is_empty());
    assert!(!blocks[2].child_nodes().is_empty());
}

#[test]
fn paper_page_serializes_with_index_hidden() {
    let paper = load_paper("attention-is-all-you-need");
    let mut page = Page::new(lens_core::Lang::Zh, lens_core::Level::Grad);
    page.commit_paper(paper_view::render(&paper));
    page.show(View::Paper);

    let html = page.to_html();
    assert!(html.contains(r#"<main id="index-view" class="hidden">"#));
    assert!(html.contains(r#"<main id="paper-view">"#));
    assert!(html.contains(r#"id="overview""#));
}
