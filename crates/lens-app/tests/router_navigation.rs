//! Router behaviour against an in-memory content source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lens_app::{MemoryHistory, MemoryStore, Preferences, Router};
use lens_client::{ContentError, ContentSource};
use lens_core::{Lang, Level, PaperDocument, PaperIndex};
use lens_render::View;
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

/// Counts fetches; can fail the index and hold one paper until released.
#[derive(Default)]
struct FakeSource {
    index: Mutex<Option<PaperIndex>>,
    papers: HashMap<String, PaperDocument>,
    index_fetches: AtomicUsize,
    paper_fetches: AtomicUsize,
    hold: Option<(String, Arc<Notify>)>,
}

impl FakeSource {
    fn new() -> Self {
        let index: PaperIndex = serde_json::from_value(serde_json::json!({
            "updated": "2026-01-01",
            "papers": [
                {"slug": "attention", "title": {"en": "Attention"}, "tags": ["nlp"]},
                {"slug": "vtp", "title": {"en": "Tokenizer"}, "tags": ["vision"]}
            ]
        }))
        .unwrap();
        let papers = ["attention", "vtp", "slow", "fast"]
            .into_iter()
            .map(|slug| (slug.to_string(), paper(slug)))
            .collect();
        Self {
            index: Mutex::new(Some(index)),
            papers,
            ..Self::default()
        }
    }

    fn failing_index() -> Self {
        let source = Self::new();
        *source.index.lock().unwrap() = None;
        source
    }

    fn holding(slug: &str, gate: Arc<Notify>) -> Self {
        Self {
            hold: Some((slug.to_string(), gate)),
            ..Self::new()
        }
    }

    fn index_fetches(&self) -> usize {
        self.index_fetches.load(Ordering::SeqCst)
    }

    fn paper_fetches(&self) -> usize {
        self.paper_fetches.load(Ordering::SeqCst)
    }
}

impl ContentSource for FakeSource {
    async fn fetch_index(&self) -> Result<PaperIndex, ContentError> {
        self.index_fetches.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let index = self.index.lock().unwrap().clone();
        index.ok_or_else(|| ContentError::Status {
            status: 503,
            url: "/data/papers.json".into(),
        })
    }

    async fn fetch_paper(&self, slug: &str) -> Result<PaperDocument, ContentError> {
        self.paper_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some((held, gate)) = &self.hold
            && held == slug
        {
            gate.notified().await;
        }
        self.papers
            .get(slug)
            .cloned()
            .ok_or_else(|| ContentError::NotFound { slug: slug.into() })
    }
}

fn paper(slug: &str) -> PaperDocument {
    serde_json::from_value(serde_json::json!({
        "slug": slug,
        "title": {"en": format!("Title of {slug}")},
        "sections": [{"id": "s", "title": {"en": "S"}, "blocks": [
            {"level": "hs", "type": "text", "text": {"en": "body"}}
        ]}]
    }))
    .unwrap()
}

fn router_at(source: FakeSource, path: &str) -> Router<FakeSource> {
    Router::new(source, Preferences::in_memory(), MemoryHistory::new(path), "en-US")
}

fn hero_title(router: &Router<FakeSource>) -> String {
    router.with_page(|page| {
        page.paper_hero()[0].as_element().unwrap().find_by_class("paper-title")[0].text_content()
    })
}

fn card_slugs(router: &Router<FakeSource>) -> Vec<String> {
    router.with_page(|page| {
        page.cards()
            .into_iter()
            .filter_map(|card| card.get_attr("data-slug"))
            .map(str::to_string)
            .collect()
    })
}

#[tokio::test]
async fn root_path_renders_index() {
    let router = router_at(FakeSource::new(), "/");
    router.route().await;

    let page = router.page();
    assert_eq!(page.view(), View::Index);
    assert_eq!(card_slugs(&router), vec!["attention", "vtp"]);
    assert_eq!(page.count_label(), "2 / 2");
    assert_eq!(router.source().index_fetches(), 1);
}

#[tokio::test]
async fn paper_round_trip_reuses_cached_index() {
    let router = router_at(FakeSource::new(), "/");
    router.route().await;

    router.open_paper("attention").await;
    assert_eq!(router.page().view(), View::Paper);
    assert_eq!(router.current_path(), "/attention");
    assert_eq!(hero_title(&router), "Title of attention");

    assert!(router.history_back().await);
    assert_eq!(router.page().view(), View::Index);
    assert_eq!(card_slugs(&router).len(), 2);
    assert_eq!(router.source().index_fetches(), 1);

    assert!(router.history_forward().await);
    assert_eq!(router.page().view(), View::Paper);
    // Papers are never cached.
    assert_eq!(router.source().paper_fetches(), 2);
}

#[tokio::test]
async fn back_control_returns_to_index() {
    let router = router_at(FakeSource::new(), "/vtp");
    router.route().await;
    assert_eq!(router.page().view(), View::Paper);

    router.navigate_home().await;
    assert_eq!(router.current_path(), "/");
    assert_eq!(router.page().view(), View::Index);
    assert_eq!(card_slugs(&router), vec!["attention", "vtp"]);
}

#[tokio::test]
async fn missing_slug_falls_back_to_index() {
    let router = router_at(FakeSource::new(), "/no-such-paper");
    router.route().await;

    let page = router.page();
    assert_eq!(page.view(), View::Index);
    assert_eq!(card_slugs(&router), vec!["attention", "vtp"]);
    assert!(page.index_status().is_none());
    // The URL is left as it was.
    assert_eq!(router.current_path(), "/no-such-paper");
}

#[tokio::test]
async fn stale_paper_response_is_dropped() {
    let gate = Arc::new(Notify::new());
    let router = router_at(FakeSource::holding("slow", Arc::clone(&gate)), "/");

    tokio::join!(router.open_paper("slow"), async {
        router.open_paper("fast").await;
        gate.notify_one();
    });

    assert_eq!(router.current_path(), "/fast");
    assert_eq!(router.page().view(), View::Paper);
    assert_eq!(hero_title(&router), "Title of fast");
}

#[tokio::test]
async fn concurrent_index_navigations_share_one_fetch() {
    let router = router_at(FakeSource::new(), "/");
    tokio::join!(router.route(), router.route());
    assert_eq!(router.source().index_fetches(), 1);
    assert_eq!(card_slugs(&router).len(), 2);
}

#[tokio::test]
async fn index_failure_is_visible_and_retried() {
    let router = router_at(FakeSource::failing_index(), "/");
    router.route().await;

    let page = router.page();
    assert_eq!(page.view(), View::Index);
    assert!(page.cards().is_empty());
    assert_eq!(page.count_label(), "0 / 0");
    assert!(page.index_status().is_some());
    assert!(!router.index_cached());

    *router.source().index.lock().unwrap() = FakeSource::new().index.into_inner().unwrap();
    router.navigate_home().await;

    let page = router.page();
    assert_eq!(page.cards().len(), 2);
    assert!(page.index_status().is_none());
    assert!(router.index_cached());
    assert_eq!(router.source().index_fetches(), 2);
}

#[tokio::test]
async fn search_survives_navigation() {
    let router = router_at(FakeSource::new(), "/");
    router.route().await;

    router.search("VISION");
    assert_eq!(card_slugs(&router), vec!["vtp"]);
    assert_eq!(router.page().count_label(), "1 / 2");

    router.open_paper("vtp").await;
    router.navigate_home().await;
    assert_eq!(router.page().search_value(), "VISION");
    assert_eq!(card_slugs(&router), vec!["vtp"]);
}

#[tokio::test]
async fn search_before_index_load_applies_on_first_render() {
    let router = router_at(FakeSource::new(), "/");
    router.search("nlp");
    assert!(router.page().cards().is_empty());

    router.route().await;
    assert_eq!(card_slugs(&router), vec!["attention"]);
}

#[tokio::test]
async fn toggles_persist_without_rerendering() {
    let router = router_at(FakeSource::new(), "/");
    router.route().await;
    let before = router.page();

    router.set_lang(Lang::Zh);
    router.set_level(Level::Grad);

    let after = router.page();
    assert_eq!(after.lang(), Lang::Zh);
    assert_eq!(after.level(), Level::Grad);
    assert_eq!(after.paper_list(), before.paper_list());
    assert_eq!(router.preferences().stored_lang(), Some(Lang::Zh));
    assert_eq!(router.preferences().stored_level(), Some(Level::Grad));
}

#[tokio::test]
async fn stored_preferences_set_initial_page() {
    let store = MemoryStore::new();
    let prefs = Preferences::new(store);
    prefs.save_lang(Lang::Zh);
    prefs.save_level(Level::Grad);

    let router = Router::new(FakeSource::new(), prefs, MemoryHistory::default(), "en-US");
    let page = router.page();
    assert_eq!(page.lang(), Lang::Zh);
    assert_eq!(page.level(), Level::Grad);
}

#[tokio::test]
async fn chinese_locale_without_preference_starts_in_chinese() {
    let router = Router::new(
        FakeSource::new(),
        Preferences::in_memory(),
        MemoryHistory::default(),
        "zh_CN.UTF-8",
    );
    assert_eq!(router.page().lang(), Lang::Zh);
    assert_eq!(router.page().level(), Level::Hs);
}
