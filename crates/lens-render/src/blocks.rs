//! Block renderer.
//!
//! Every block becomes a `div.level[data-level]` wrapper holding one element
//! per available language. Nothing is filtered by the current language or
//! level: visibility is decided by the page's root attributes, so toggling
//! never needs a re-render.

use lens_core::{BlockBody, ContentBlock, Level, Localized, Summary};

use crate::node::{Element, Node};

/// One `tag.lang[data-lang]` element per translation.
#[must_use]
pub fn lang_spans(tag: &'static str, content: &Localized) -> Vec<Node> {
    content
        .iter()
        .map(|(lang, text)| {
            Element::new(tag)
                .class("lang")
                .attr("data-lang", lang.as_str())
                .text(text.as_str())
                .into()
        })
        .collect()
}

/// One `p.level[data-level]` per reading level, each holding localized spans.
#[must_use]
pub fn leveled_summary(summary: &Summary) -> Element {
    Element::new("div").children(Level::ALL.into_iter().map(|level| {
        Element::new("p")
            .class("level")
            .attr("data-level", level.as_str())
            .children(lang_spans("span", summary.get(level)))
    }))
}

/// Render one content block.
#[must_use]
pub fn render_block(block: &ContentBlock) -> Node {
    let wrapper = Element::new("div")
        .class("level")
        .attr("data-level", block.level.as_str());

    let wrapper = match &block.body {
        BlockBody::Text(text) => wrapper.children(lang_elements(text, |text| {
            Element::new("p").class("lang").text(text.as_str())
        })),
        BlockBody::Note(text) => wrapper.children(lang_elements(text, |text| {
            Element::new("p").class("lang note").text(text.as_str())
        })),
        BlockBody::List(items) => wrapper.children(lang_elements(items, |items| {
            Element::new("ul")
                .class("lang meta-list")
                .children(items.iter().map(|item| Element::new("li").text(item.as_str())))
        })),
        BlockBody::Equation(lines) => wrapper.children(lang_elements(lines, |lines| {
            Element::new("pre")
                .class("lang code")
                .text(lines.join("\n"))
        })),
        BlockBody::Unknown(kind) => {
            tracing::debug!(kind = kind.as_str(), "rendering unknown block kind as empty container");
            wrapper
        }
    };
    wrapper.into()
}

/// Build one element per translation and tag it with `data-lang`.
fn lang_elements<T>(
    content: &Localized<T>,
    build: impl Fn(&T) -> Element,
) -> impl Iterator<Item = Element> {
    content
        .iter()
        .map(move |(lang, value)| build(value).attr("data-lang", lang.as_str()))
}
