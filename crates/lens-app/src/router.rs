//! The router: keeps history, fetched data and the visible page in sync.
//!
//! All methods take `&self`. The page and history live behind a mutex that
//! is never held across an await. Each navigation takes a generation token
//! when it starts; a fetch that completes after a newer navigation began is
//! dropped without touching the page.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lens_client::{ContentError, ContentSource};
use lens_core::{IndexEntry, Lang, Level};
use lens_render::{Page, View, index_view, paper_view};
use tokio::sync::OnceCell;

use crate::history::History;
use crate::prefs::Preferences;
use crate::route::Route;

struct Shell {
    page: Page,
    history: Box<dyn History>,
}

pub struct Router<S> {
    source: S,
    prefs: Preferences,
    shell: Mutex<Shell>,
    generation: AtomicU64,
    index: OnceCell<Arc<[IndexEntry]>>,
}

impl<S> std::fmt::Debug for Router<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("index_cached", &self.index.initialized())
            .finish_non_exhaustive()
    }
}

impl<S: ContentSource> Router<S> {
    /// Build a router. Language and level come from stored preferences,
    /// falling back to `locale` and `hs`. Nothing is rendered until
    /// [`Router::route`] runs.
    pub fn new(
        source: S,
        prefs: Preferences,
        history: impl History + 'static,
        locale: &str,
    ) -> Self {
        let page = Page::new(prefs.initial_lang(locale), prefs.initial_level());
        Self {
            source,
            prefs,
            shell: Mutex::new(Shell {
                page,
                history: Box::new(history),
            }),
            generation: AtomicU64::new(0),
            index: OnceCell::new(),
        }
    }

    // ── Navigation ────────────────────────────────────────────────────

    /// Derive the view from the current history path and render it.
    pub async fn route(&self) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let route = Route::from_path(self.shell().history.current_path());
        tracing::debug!(token, %route, "routing");
        match route {
            Route::Index => self.enter_index(token).await,
            Route::Paper(slug) => self.enter_paper(token, &slug).await,
        }
    }

    /// Push a history entry for `path` and route to it.
    pub async fn navigate_to(&self, path: &str) {
        self.shell().history.push(path);
        self.route().await;
    }

    /// Card activation.
    pub async fn open_paper(&self, slug: &str) {
        self.navigate_to(&Route::Paper(slug.to_string()).path()).await;
    }

    /// The back control on the paper view.
    pub async fn navigate_home(&self) {
        self.navigate_to(&Route::Index.path()).await;
    }

    /// Move back in history and route. Returns `false` if already at the start.
    pub async fn history_back(&self) -> bool {
        let moved = self.shell().history.back();
        if moved {
            self.route().await;
        }
        moved
    }

    /// Move forward in history and route. Returns `false` if already at the end.
    pub async fn history_forward(&self) -> bool {
        let moved = self.shell().history.forward();
        if moved {
            self.route().await;
        }
        moved
    }

    async fn enter_index(&self, token: u64) {
        self.commit(token, |shell| shell.page.show(View::Index));

        match self.index_entries().await {
            Ok(entries) => {
                self.commit(token, |shell| {
                    let render = index_view::render(&entries, shell.page.search_value());
                    shell.page.commit_index(render);
                });
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load paper index");
                self.commit(token, |shell| shell.page.show_index_unavailable());
            }
        }
    }

    async fn enter_paper(&self, token: u64, slug: &str) {
        self.commit(token, |shell| shell.page.show(View::Paper));

        match self.source.fetch_paper(slug).await {
            Ok(paper) => {
                let render = paper_view::render(&paper);
                self.commit(token, |shell| shell.page.commit_paper(render));
            }
            Err(error) => {
                if error.is_not_found() {
                    tracing::debug!(slug, "paper not found; showing index");
                } else {
                    tracing::warn!(slug, %error, "failed to load paper; showing index");
                }
                if self.is_current(token) {
                    self.enter_index(token).await;
                }
            }
        }
    }

    /// The paper index, fetched once per session.
    ///
    /// Concurrent callers share a single in-flight fetch. A failed fetch
    /// leaves nothing cached, so the next call retries.
    ///
    /// # Errors
    ///
    /// Returns the [`ContentError`] of the failed fetch.
    pub async fn index_entries(&self) -> Result<Arc<[IndexEntry]>, ContentError> {
        self.index
            .get_or_try_init(|| async {
                let index = self.source.fetch_index().await?;
                tracing::debug!(papers = index.papers.len(), "paper index cached");
                Ok::<_, ContentError>(Arc::from(index.papers))
            })
            .await
            .cloned()
    }

    // ── Search and toggles ────────────────────────────────────────────

    /// Store the search text and re-render the list from the cached index.
    ///
    /// Before the index has loaded this only records the text; the first
    /// index render uses it.
    pub fn search(&self, text: &str) {
        let cached = self.index.get().cloned();
        let mut shell = self.shell();
        shell.page.set_search_value(text);
        if let Some(entries) = cached {
            let render = index_view::render(&entries, text);
            shell.page.commit_index(render);
        }
    }

    /// Switch the visible language and remember it. Nothing is re-rendered.
    pub fn set_lang(&self, lang: Lang) {
        self.shell().page.set_lang(lang);
        self.prefs.save_lang(lang);
    }

    /// Switch the visible reading level and remember it. Nothing is re-rendered.
    pub fn set_level(&self, level: Level) {
        self.shell().page.set_level(level);
        self.prefs.save_level(level);
    }

    // ── Inspection ────────────────────────────────────────────────────

    /// Snapshot of the page.
    #[must_use]
    pub fn page(&self) -> Page {
        self.shell().page.clone()
    }

    /// Run `f` against the page without cloning it.
    pub fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        f(&self.shell().page)
    }

    #[must_use]
    pub fn current_path(&self) -> String {
        self.shell().history.current_path().to_string()
    }

    #[must_use]
    pub fn current_route(&self) -> Route {
        Route::from_path(self.shell().history.current_path())
    }

    #[must_use]
    pub fn index_cached(&self) -> bool {
        self.index.initialized()
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    // ── Internals ─────────────────────────────────────────────────────

    fn shell(&self) -> MutexGuard<'_, Shell> {
        self.shell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Apply `f` if `token` still belongs to the newest navigation.
    fn commit(&self, token: u64, f: impl FnOnce(&mut Shell)) {
        let mut shell = self.shell();
        if self.is_current(token) {
            f(&mut shell);
        } else {
            tracing::debug!(token, "dropping result of superseded navigation");
        }
    }
}
