//! Paper view: hero, facts, links, metadata, and sections.

use lens_core::{Localized, PaperDocument, Section};

use crate::blocks::{lang_spans, leveled_summary, render_block};
use crate::node::{Element, Node};

/// Output of one paper render, one list per page container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRender {
    pub hero: Vec<Node>,
    pub meta: Vec<Node>,
    pub sections: Vec<Node>,
}

fn label(en: &str, zh: &str) -> Localized {
    Localized::new(en.to_string(), zh.to_string())
}

/// Render every container of the paper page.
#[must_use]
pub fn render(paper: &PaperDocument) -> PaperRender {
    PaperRender {
        hero: vec![hero_text(paper).into(), facts_card(paper).into()],
        meta: vec![links_card(paper).into(), metadata_card(paper).into()],
        sections: paper.sections.iter().map(|s| section(s).into()).collect(),
    }
}

fn hero_text(paper: &PaperDocument) -> Element {
    let tags = Element::new("div").class("tag-row").children(
        paper
            .tags
            .iter()
            .map(|tag| Element::new("span").class("tag").text(tag.as_str())),
    );

    Element::new("div")
        .child(
            Element::new("h1")
                .class("paper-title")
                .children(lang_spans("span", &paper.title)),
        )
        .child(
            Element::new("p")
                .class("paper-subtitle")
                .children(lang_spans("span", &paper.subtitle)),
        )
        .child(leveled_summary(&paper.summary))
        .child(tags)
}

fn facts_card(paper: &PaperDocument) -> Element {
    Element::new("div")
        .class("hero-card")
        .child(Element::new("h2").children(lang_spans("span", &label("Paper facts", "论文信息"))))
        .child(
            Element::new("ul").children(
                paper
                    .authors
                    .iter()
                    .map(|author| Element::new("li").text(author.as_str())),
            ),
        )
}

fn links_card(paper: &PaperDocument) -> Element {
    let items = paper.links.non_empty().map(|link| {
        Element::new("li").child(
            Element::new("a")
                .attr("href", link.url.as_str())
                .attr("target", "_blank")
                .attr("rel", "noreferrer")
                .text(link.label.as_str()),
        )
    });

    Element::new("div")
        .class("meta-card")
        .child(Element::new("h3").children(lang_spans("span", &label("Links", "链接"))))
        .child(Element::new("ul").class("meta-list").children(items))
}

/// `arXiv`, `Date`, `Venue`, each only when present, always in that order.
#[must_use]
pub fn metadata_items(paper: &PaperDocument) -> Vec<String> {
    [
        paper.arxiv_id.as_ref().map(|id| format!("arXiv: {id}")),
        paper.date.as_ref().map(|date| format!("Date: {date}")),
        paper.venue.as_ref().map(|venue| format!("Venue: {venue}")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn metadata_card(paper: &PaperDocument) -> Element {
    Element::new("div")
        .class("meta-card")
        .child(Element::new("h3").children(lang_spans("span", &label("Metadata", "元信息"))))
        .child(
            Element::new("ul").class("meta-list").children(
                metadata_items(paper)
                    .into_iter()
                    .map(|item| Element::new("li").text(item)),
            ),
        )
}

fn section(section: &Section) -> Element {
    Element::new("div")
        .class("section-card")
        .attr("id", section.id.as_str())
        .child(Element::new("h2").children(lang_spans("span", &section.title)))
        .children(section.blocks.iter().map(render_block))
}
