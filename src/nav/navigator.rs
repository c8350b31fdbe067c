//! The navigator: one application-state object per page.
//!
//! Holds the catalog, the current view, the history surface, the page
//! containers, the current outline and scroll spy. Every transition bumps a
//! generation counter; a document fetch carries the generation it was issued
//! under (its ticket) and is applied only if no newer transition happened
//! while it was in flight.
//!
//! # Flow
//!
//! ```text
//! open(slug)
//!    │ lock: generation += 1, dispose spy, push {post: slug}, show loading
//!    ▼
//! fetch source text            (unlocked; other transitions may run)
//!    │
//!    ▼ lock: ticket == generation?
//!    ├── no  → StaleResponseDiscarded, page untouched
//!    └── yes → convert, highlight, build outline, attach spy
//! ```

use parking_lot::Mutex;

use super::history::{view_url, History, Location, MemoryHistory};
use super::page::Page;
use super::{HistoryState, ViewState};
use crate::catalog::{self, Catalog, CatalogEntry};
use crate::config::PressConfig;
use crate::convert::Convert;
use crate::error::{PressError, PressResult};
use crate::fetch::Fetch;
use crate::highlight::Highlight;
use crate::outline::Outline;
use crate::renderer::DocumentRenderer;
use crate::spy::{mark_active, Layout, ScrollSpy, Viewport};

/// How a transition records itself in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record {
    Push,
    Replace,
    /// Transitions triggered by history traversal never write history
    Skip,
}

/// Mutable session state, guarded by the navigator's lock.
#[derive(Debug)]
struct Session<S> {
    catalog: Catalog,
    catalog_loaded: bool,
    view: ViewState,
    current: Option<CatalogEntry>,
    history: S,
    page: Page,
    generation: u64,
    outline: Outline,
    spy: Option<ScrollSpy>,
}

impl<S: History> Session<S> {
    /// Start a transition: new generation, old spy disposed.
    fn begin(&mut self) -> u64 {
        self.generation += 1;
        if let Some(spy) = self.spy.take() {
            spy.dispose();
        }
        self.outline = Outline::Empty;
        self.current = None;
        self.generation
    }

    fn record(&mut self, config: &PressConfig, record: Record) {
        let state = HistoryState::from(&self.view);
        let url = view_url(config, &self.view);
        match record {
            Record::Push => self.history.push_state(state, &url),
            Record::Replace => self.history.replace_state(state, &url),
            Record::Skip => {}
        }
    }
}

/// Drives the List and Document views.
///
/// `F` fetches resources, `C` and `H` are the conversion and highlighting
/// engines, `S` is the history surface.
pub struct Navigator<F, C, H, S = MemoryHistory> {
    fetch: F,
    renderer: DocumentRenderer<C, H>,
    session: Mutex<Session<S>>,
}

impl<F, C, H, S> Navigator<F, C, H, S>
where
    F: Fetch,
    C: Convert,
    H: Highlight,
    S: History,
{
    pub fn new(fetch: F, renderer: DocumentRenderer<C, H>, history: S) -> Self {
        Self {
            fetch,
            renderer,
            session: Mutex::new(Session {
                catalog: Catalog::empty(),
                catalog_loaded: false,
                view: ViewState::List,
                current: None,
                history,
                page: Page::new(),
                generation: 0,
                outline: Outline::Empty,
                spy: None,
            }),
        }
    }

    pub fn config(&self) -> &PressConfig {
        self.renderer.config()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Load the catalog, show the list, then follow a deep link if present.
    ///
    /// The catalog is fetched at most once per navigator. The list entry
    /// replaces the current history entry; a deep-linked document is pushed
    /// on top of it.
    ///
    /// Other transitions must wait for this to resolve: until the catalog
    /// has arrived every slug is unknown, and `open` shows the not-found
    /// panel.
    pub async fn start(&self, location: &Location) -> PressResult<()> {
        let needs_catalog = {
            let mut session = self.session.lock();
            !std::mem::replace(&mut session.catalog_loaded, true)
        };
        if needs_catalog {
            let loaded = catalog::load(&self.fetch, self.config()).await;
            self.session.lock().catalog = loaded;
        }

        self.enter_list(Record::Replace);

        match location.deep_link(self.config()) {
            Some(slug) => {
                tracing::debug!(slug, "following deep link");
                self.enter_document(slug, Record::Push).await
            }
            None => Ok(()),
        }
    }

    /// Show the list view and push an empty history entry.
    pub fn show_list(&self) {
        self.enter_list(Record::Push);
    }

    /// The document view's "back to posts" control.
    ///
    /// Returns `false` (and does nothing) when the list is already shown.
    pub fn back(&self) -> bool {
        if self.session.lock().view.is_list() {
            return false;
        }
        self.show_list();
        true
    }

    /// Open a document and push `{post: slug}`.
    ///
    /// Call after `start` has resolved.
    pub async fn open(&self, slug: &str) -> PressResult<()> {
        self.enter_document(slug, Record::Push).await
    }

    /// Restore the view stored in a history entry without writing history.
    pub async fn pop_state(&self, state: Option<HistoryState>) -> PressResult<()> {
        match ViewState::from(state.unwrap_or_default()) {
            ViewState::List => {
                self.enter_list(Record::Skip);
                Ok(())
            }
            ViewState::Document(slug) => self.enter_document(&slug, Record::Skip).await,
        }
    }

    fn enter_list(&self, record: Record) {
        let mut session = self.session.lock();
        let generation = session.begin();
        session.view = ViewState::List;
        session.record(self.config(), record);

        let cards = catalog::render_cards(&session.catalog, &self.config().date_format);
        session.page.show_list(cards);
        tracing::debug!(generation, "showing list");
    }

    async fn enter_document(&self, slug: &str, record: Record) -> PressResult<()> {
        let (ticket, entry) = {
            let mut session = self.session.lock();
            let ticket = session.begin();
            session.view = ViewState::document(slug);
            session.record(self.config(), record);
            session.page.show_loading();

            let entry = self.renderer.resolve(&session.catalog, slug).cloned();
            if let Err(err) = &entry {
                session.page.show_error(err.panel_message());
            }
            (ticket, entry?)
        };

        let source = self.renderer.fetch_source(&self.fetch, &entry).await;

        let mut session = self.session.lock();
        if session.generation != ticket {
            tracing::debug!(
                slug,
                generation = ticket,
                current = session.generation,
                "discarding stale document"
            );
            return Err(PressError::StaleResponseDiscarded {
                slug: entry.slug,
                generation: ticket,
                current: session.generation,
            });
        }

        let rendered = source.and_then(|text| self.renderer.assemble(&entry, &text));
        let mut doc = match rendered {
            Ok(doc) => doc,
            Err(err) => {
                session.page.show_error(err.panel_message());
                return Err(err);
            }
        };

        let outline = Outline::build(&mut doc.content.root);
        let spy = ScrollSpy::attach(&outline, self.config().band);
        session.page.show_document(doc.content.root, &outline);
        session.outline = outline;
        session.spy = Some(spy);
        session.current = Some(doc.entry);
        tracing::debug!(slug, generation = ticket, "document shown");
        Ok(())
    }

    // =========================================================================
    // Scroll spy
    // =========================================================================

    /// Feed a scroll to the spy; returns the newly active heading id.
    pub fn on_scroll<L: Layout>(&self, viewport: Viewport, layout: &L) -> Option<String> {
        let mut guard = self.session.lock();
        let session = &mut *guard;
        let active = session.spy.as_mut()?.on_scroll(viewport, layout)?.to_string();
        mark_active(&mut session.page.toc, Some(&active));
        Some(active)
    }

    /// Outline link clicked; returns the heading id to scroll to.
    pub fn select_heading(&self, id: &str) -> Option<String> {
        let mut guard = self.session.lock();
        let session = &mut *guard;
        let target = session.spy.as_mut()?.select(id)?.to_string();
        mark_active(&mut session.page.toc, Some(&target));
        Some(target)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn view(&self) -> ViewState {
        self.session.lock().view.clone()
    }

    /// Generation of the latest transition.
    pub fn generation(&self) -> u64 {
        self.session.lock().generation
    }

    /// Entry of the document currently shown.
    pub fn current(&self) -> Option<CatalogEntry> {
        self.session.lock().current.clone()
    }

    pub fn outline(&self) -> Outline {
        self.session.lock().outline.clone()
    }

    pub fn active_heading(&self) -> Option<String> {
        self.session.lock().spy.as_ref()?.active().map(str::to_string)
    }

    pub fn catalog(&self) -> Catalog {
        self.session.lock().catalog.clone()
    }

    /// Run `f` against the page containers.
    pub fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        f(&self.session.lock().page)
    }

    /// Run `f` against the history surface, e.g. to step back or forward.
    pub fn with_history<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.session.lock().history)
    }
}
