//! Page shell: the application's document.
//!
//! Holds the root presentation attributes, which view is visible, and the
//! children of every container the views render into. Commits always replace
//! a container's children wholesale; nothing is patched in place.

use lens_core::{Lang, Level, Localized};

use crate::blocks::lang_spans;
use crate::index_view::IndexRender;
use crate::node::{Element, Node};
use crate::paper_view::PaperRender;

/// Which top-level container is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    Paper,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lang: Lang,
    level: Level,
    view: View,
    search_value: String,
    paper_count: String,
    index_status: Option<Node>,
    paper_list: Vec<Node>,
    paper_hero: Vec<Node>,
    paper_meta: Vec<Node>,
    paper_sections: Vec<Node>,
}

impl Page {
    #[must_use]
    pub const fn new(lang: Lang, level: Level) -> Self {
        Self {
            lang,
            level,
            view: View::Index,
            search_value: String::new(),
            paper_count: String::new(),
            index_status: None,
            paper_list: Vec::new(),
            paper_hero: Vec::new(),
            paper_meta: Vec::new(),
            paper_sections: Vec::new(),
        }
    }

    // ── Presentation attributes ───────────────────────────────────────

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    pub const fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    pub const fn show(&mut self, view: View) {
        self.view = view;
    }

    // ── Index containers ──────────────────────────────────────────────

    #[must_use]
    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    pub fn set_search_value(&mut self, value: &str) {
        value.clone_into(&mut self.search_value);
    }

    #[must_use]
    pub fn count_label(&self) -> &str {
        &self.paper_count
    }

    #[must_use]
    pub fn paper_list(&self) -> &[Node] {
        &self.paper_list
    }

    #[must_use]
    pub const fn index_status(&self) -> Option<&Node> {
        self.index_status.as_ref()
    }

    /// Rendered cards, in list order.
    #[must_use]
    pub fn cards(&self) -> Vec<&Element> {
        self.paper_list
            .iter()
            .filter_map(Node::as_element)
            .filter(|el| el.has_class("paper-card"))
            .collect()
    }

    pub fn commit_index(&mut self, render: IndexRender) {
        self.paper_list = render.cards;
        self.paper_count = render.count_label;
        self.index_status = None;
    }

    /// Degraded index state: empty list plus a visible alert.
    pub fn show_index_unavailable(&mut self) {
        self.paper_list.clear();
        self.paper_count = String::from("0 / 0");
        let message = Localized::new(
            String::from("The paper list could not be loaded. Try again later."),
            String::from("论文列表加载失败，请稍后再试。"),
        );
        self.index_status = Some(
            Element::new("div")
                .class("status")
                .attr("role", "alert")
                .children(lang_spans("span", &message))
                .into(),
        );
    }

    // ── Paper containers ──────────────────────────────────────────────

    #[must_use]
    pub fn paper_hero(&self) -> &[Node] {
        &self.paper_hero
    }

    #[must_use]
    pub fn paper_meta(&self) -> &[Node] {
        &self.paper_meta
    }

    #[must_use]
    pub fn paper_sections(&self) -> &[Node] {
        &self.paper_sections
    }

    pub fn commit_paper(&mut self, render: PaperRender) {
        self.paper_hero = render.hero;
        self.paper_meta = render.meta;
        self.paper_sections = render.sections;
    }

    // ── Serialization ─────────────────────────────────────────────────

    /// Whole document as an element tree.
    #[must_use]
    pub fn document(&self) -> Element {
        let body = Element::new("body")
            .child(self.toggles())
            .child(self.index_container())
            .child(self.paper_container());

        Element::new("html")
            .attr("lang", self.lang.as_str())
            .attr("data-lang", self.lang.as_str())
            .attr("data-level", self.level.as_str())
            .child(Element::new("head").child(Element::new("meta").attr("charset", "utf-8")))
            .child(body)
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!doctype html>");
        self.document().write_html(&mut out);
        out
    }

    fn toggles(&self) -> Element {
        let lang_buttons = Lang::ALL.into_iter().map(|lang| {
            Element::new("button")
                .attr("data-lang-btn", lang.as_str())
                .attr("aria-pressed", (lang == self.lang).to_string())
                .text(lang.as_str())
        });
        let level_buttons = Level::ALL.into_iter().map(|level| {
            Element::new("button")
                .attr("data-level-btn", level.as_str())
                .attr("aria-pressed", (level == self.level).to_string())
                .text(level.as_str())
        });
        Element::new("nav")
            .class("toggles")
            .children(lang_buttons)
            .children(level_buttons)
    }

    fn index_container(&self) -> Element {
        let mut container = Element::new("main").attr("id", "index-view");
        if self.view != View::Index {
            container = container.class("hidden");
        }
        container
            .child(
                Element::new("input")
                    .attr("id", "search-input")
                    .attr("type", "search")
                    .attr("value", self.search_value.as_str()),
            )
            .child(
                Element::new("span")
                    .attr("id", "paper-count")
                    .text(self.paper_count.as_str()),
            )
            .children(self.index_status.iter().cloned())
            .child(
                Element::new("div")
                    .attr("id", "paper-list")
                    .children(self.paper_list.iter().cloned()),
            )
    }

    fn paper_container(&self) -> Element {
        let mut container = Element::new("main").attr("id", "paper-view");
        if self.view != View::Paper {
            container = container.class("hidden");
        }
        container
            .child(
                Element::new("a")
                    .attr("id", "back-btn")
                    .attr("href", "/")
                    .children(lang_spans(
                        "span",
                        &Localized::new(String::from("All papers"), String::from("全部论文")),
                    )),
            )
            .child(
                Element::new("header")
                    .attr("id", "paper-hero")
                    .children(self.paper_hero.iter().cloned()),
            )
            .child(
                Element::new("section")
                    .attr("id", "paper-meta")
                    .children(self.paper_meta.iter().cloned()),
            )
            .child(
                Element::new("section")
                    .attr("id", "paper-sections")
                    .children(self.paper_sections.iter().cloned()),
            )
    }
}
