//! Index view: search predicate and paper cards.

use lens_core::IndexEntry;

use crate::blocks::{lang_spans, leveled_summary};
use crate::node::{Element, Node};

/// Output of one index render: the full card list and its count label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRender {
    pub cards: Vec<Node>,
    pub count_label: String,
    pub matched: usize,
    pub total: usize,
}

/// Trim and lowercase a raw search string.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Lowercased search haystack: slug, both titles, arXiv id, then tags, space-joined.
#[must_use]
pub fn haystack(entry: &IndexEntry) -> String {
    let mut fields: Vec<&str> = vec![
        entry.slug.as_str(),
        entry.title.en.as_deref().unwrap_or_default(),
        entry.title.zh.as_deref().unwrap_or_default(),
        entry.arxiv_id.as_deref().unwrap_or_default(),
    ];
    fields.extend(entry.tags.iter().map(String::as_str));
    fields.join(" ").to_lowercase()
}

/// Whether `entry` matches an already-normalized query.
///
/// Plain substring containment; an empty query matches everything.
#[must_use]
pub fn matches(entry: &IndexEntry, normalized: &str) -> bool {
    normalized.is_empty() || haystack(entry).contains(normalized)
}

/// Entries matching `query`, in index order.
#[must_use]
pub fn filter<'a>(entries: &'a [IndexEntry], query: &str) -> Vec<&'a IndexEntry> {
    let normalized = normalize_query(query);
    entries
        .iter()
        .filter(|entry| matches(entry, &normalized))
        .collect()
}

#[must_use]
pub fn count_label(matched: usize, total: usize) -> String {
    format!("{matched} / {total}")
}

/// Render the card list for `entries` filtered by `query`.
#[must_use]
pub fn render(entries: &[IndexEntry], query: &str) -> IndexRender {
    let filtered = filter(entries, query);
    let matched = filtered.len();
    IndexRender {
        cards: filtered.into_iter().map(|entry| card(entry).into()).collect(),
        count_label: count_label(matched, entries.len()),
        matched,
        total: entries.len(),
    }
}

/// Route path a card navigates to. The slug is percent-encoded.
#[must_use]
pub fn card_href(slug: &str) -> String {
    format!("/{}", urlencoding::encode(slug))
}

fn card(entry: &IndexEntry) -> Element {
    let pills = Element::new("div").class("pill-row").children(
        entry
            .tags
            .iter()
            .map(|tag| Element::new("span").class("pill").text(tag.as_str())),
    );
    let source = entry.arxiv_id.as_ref().map_or_else(
        || String::from("Paper"),
        |id| format!("arXiv {id}"),
    );

    Element::new("a")
        .class("paper-card")
        .attr("href", card_href(&entry.slug))
        .attr("data-slug", entry.slug.as_str())
        .child(Element::new("h3").children(lang_spans("span", &entry.title)))
        .child(leveled_summary(&entry.summary))
        .child(pills)
        .child(Element::new("div").class("pill").text(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn entries() -> Vec<IndexEntry> {
        serde_json::from_value(serde_json::json!([
            {"slug": "a", "title": {"en": "Attention"}, "tags": ["nlp"]},
            {"slug": "b", "title": {"en": "Tokenizer"}, "tags": ["nlp", "vision"]}
        ]))
        .unwrap()
    }

    fn slugs(filtered: &[&IndexEntry]) -> Vec<String> {
        filtered.iter().map(|e| e.slug.clone()).collect()
    }

    #[test]
    fn vision_query_matches_only_tokenizer() {
        let entries = entries();
        let render = render(&entries, "vision");
        assert_eq!(render.count_label, "1 / 2");
        assert_eq!(render.matched, 1);
        let card = render.cards[0].as_element().unwrap();
        assert_eq!(card.get_attr("data-slug"), Some("b"));
        assert_eq!(card.get_attr("href"), Some("/b"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_query_matches_everything(#[case] query: &str) {
        let entries = entries();
        assert_eq!(slugs(&filter(&entries, query)), vec!["a", "b"]);
        assert_eq!(render(&entries, query).count_label, "2 / 2");
    }

    #[rstest]
    #[case("ATTENTION", vec!["a"])]
    #[case("  TeNtIo ", vec!["a"])]
    #[case("NLP", vec!["a", "b"])]
    #[case("kenizer", vec!["b"])]
    #[case("zzz", vec![])]
    fn matching_is_case_insensitive_substring(#[case] query: &str, #[case] expected: Vec<&str>) {
        let entries = entries();
        assert_eq!(slugs(&filter(&entries, query)), expected);
    }

    #[test]
    fn query_may_span_field_separator() {
        let entries = entries();
        assert_eq!(slugs(&filter(&entries, "nlp vision")), vec!["b"]);
    }

    #[test]
    fn arxiv_id_and_chinese_title_are_searchable() {
        let entries: Vec<IndexEntry> = serde_json::from_value(serde_json::json!([
            {"slug": "x", "title": {"en": "X", "zh": "注意力"}, "arxivId": "1706.03762"},
            {"slug": "y", "title": {"en": "Y"}}
        ]))
        .unwrap();
        assert_eq!(slugs(&filter(&entries, "1706.037")), vec!["x"]);
        assert_eq!(slugs(&filter(&entries, "注意")), vec!["x"]);
    }

    #[test]
    fn filtering_preserves_index_order() {
        let entries: Vec<IndexEntry> = serde_json::from_value(serde_json::json!([
            {"slug": "z-shared"}, {"slug": "m"}, {"slug": "a-shared"}, {"slug": "q-shared"}
        ]))
        .unwrap();
        assert_eq!(
            slugs(&filter(&entries, "shared")),
            vec!["z-shared", "a-shared", "q-shared"]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let entries = entries();
        assert_eq!(render(&entries, "nlp"), render(&entries, "nlp"));
    }

    #[test]
    fn card_shows_source_pill() {
        let entries: Vec<IndexEntry> = serde_json::from_value(serde_json::json!([
            {"slug": "x", "arxivId": "1706.03762"},
            {"slug": "y"}
        ]))
        .unwrap();
        let render = render(&entries, "");
        let pills: Vec<String> = render
            .cards
            .iter()
            .map(|card| {
                card.as_element()
                    .unwrap()
                    .child_elements()
                    .last()
                    .unwrap()
                    .text_content()
            })
            .collect();
        assert_eq!(pills, vec!["arXiv 1706.03762", "Paper"]);
    }

    #[rstest]
    #[case("vtp", "/vtp")]
    #[case("a b", "/a%20b")]
    #[case("q?x#y", "/q%3Fx%23y")]
    fn card_href_encodes_slug(#[case] slug: &str, #[case] expected: &str) {
        assert_eq!(card_href(slug), expected);
    }
}
