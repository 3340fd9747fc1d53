//! The interaction controller: panel state machine plus the
//! mutate → persist → render cycle behind every visitor action.

use tracing::{debug, error, info};

use crate::config::QuickQuoteConfig;
use crate::item::{AddRequest, QuoteItem};
use crate::persist::QuoteRepository;
use crate::store::QuoteStore;
use crate::submit;
use crate::surface::{self, Surface};
use crate::system::{Dialog, Navigator, Persistence, TimerHandle, Timers};
use crate::toast::Toast;

/// Whether the sidebar is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Every interaction the controller responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleOpen,
    ToggleClose,
    BackdropClick,
    EscapeKey,
    /// An on-page "add to quote" control was clicked.
    Add(AddRequest),
    Remove(String),
    AdjustQuantity { id: String, delta: i64 },
    ClearAll,
    Submit,
    /// A timeout scheduled through [`Timers`] elapsed.
    TimerFired(TimerHandle),
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The panel moved to this state.
    Panel(PanelState),
    /// The collection was mutated, saved and re-rendered.
    Updated,
    /// The visitor declined the clear confirmation; nothing changed.
    Declined,
    /// The visitor was sent to this URL.
    Navigated(String),
    ToastHidden,
    /// Nothing to do (e.g. escape while closed, unknown id, stale timer).
    Ignored,
}

/// The quote builder for one page session.
///
/// Owns the store exclusively; host capabilities are injected. Every
/// mutation is followed by a save and a full re-render before the call
/// returns.
pub struct QuickQuote<P, S, T, D, N> {
    config: QuickQuoteConfig,
    store: QuoteStore,
    repo: QuoteRepository<P>,
    surface: S,
    timers: T,
    dialog: D,
    navigator: N,
    panel: PanelState,
    toast: Toast,
}

impl<P, S, T, D, N> QuickQuote<P, S, T, D, N>
where
    P: Persistence,
    S: Surface,
    T: Timers,
    D: Dialog,
    N: Navigator,
{
    /// Hydrate from storage and perform the initial render.
    pub fn init(
        config: QuickQuoteConfig,
        storage: P,
        surface: S,
        timers: T,
        dialog: D,
        navigator: N,
    ) -> Self {
        let repo = QuoteRepository::with_key(storage, config.storage_key.clone());
        let store =
            QuoteStore::from_items(repo.load()).with_default_image(config.default_image.clone());
        debug!(count = store.len(), total = store.total_quantity(), "quote builder ready");

        let mut this = Self {
            toast: Toast::new(config.toast_duration_ms),
            config,
            store,
            repo,
            surface,
            timers,
            dialog,
            navigator,
            panel: PanelState::Closed,
        };
        this.render();
        this
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::ToggleOpen => self.open(),
            Event::ToggleClose | Event::BackdropClick => self.close(),
            Event::EscapeKey => {
                if self.panel == PanelState::Open {
                    self.close()
                } else {
                    Outcome::Ignored
                }
            }
            Event::Add(request) => self.add(request),
            Event::Remove(id) => self.remove(&id),
            Event::AdjustQuantity { id, delta } => self.adjust_quantity(&id, delta),
            Event::ClearAll => self.clear_all(),
            Event::Submit => self.submit(),
            Event::TimerFired(handle) => {
                if self.toast.expire(handle, &mut self.surface) {
                    Outcome::ToastHidden
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    pub fn open(&mut self) -> Outcome {
        self.set_panel(PanelState::Open)
    }

    pub fn close(&mut self) -> Outcome {
        self.set_panel(PanelState::Closed)
    }

    pub fn add(&mut self, request: AddRequest) -> Outcome {
        let key = request.key();
        self.store.add(request);
        debug!(id = %key, total = self.store.total_quantity(), "added to quote");
        self.commit();
        self.toast
            .show(&self.config.toast_message, &mut self.timers, &mut self.surface);
        Outcome::Updated
    }

    /// Removing an absent id still saves and re-renders; both are harmless.
    pub fn remove(&mut self, id: &str) -> Outcome {
        if !self.store.remove(id) {
            debug!(id, "remove: id not in quote");
        }
        self.commit();
        Outcome::Updated
    }

    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Outcome {
        if !self.store.set_quantity_delta(id, delta) {
            debug!(id, delta, "adjust: id not in quote");
            return Outcome::Ignored;
        }
        self.commit();
        Outcome::Updated
    }

    /// Clear everything after the visitor confirms.
    pub fn clear_all(&mut self) -> Outcome {
        if !self.dialog.confirm(&self.config.confirm_clear_message) {
            return Outcome::Declined;
        }
        self.store.clear();
        info!("quote cleared");
        self.commit();
        Outcome::Updated
    }

    /// Navigate to the quote-request page with the items pre-filled. The
    /// store is left untouched.
    pub fn submit(&mut self) -> Outcome {
        let details = submit::format_quote_details(&self.store.snapshot(), &self.config.delimiter);
        match submit::quote_request_url(
            self.navigator.location(),
            &self.config.quote_page,
            &self.config.query_param,
            &details,
        ) {
            Ok(url) => {
                self.navigator.navigate(url.as_str());
                Outcome::Navigated(url.into())
            }
            Err(e) => {
                error!(location = self.navigator.location(), error = %e, "cannot build quote request URL");
                Outcome::Ignored
            }
        }
    }

    /// Re-project the store into every region.
    pub fn render(&mut self) {
        surface::render(&self.store, &mut self.surface);
    }

    /// A detached copy of the current items.
    pub fn items(&self) -> Vec<QuoteItem> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn total_quantity(&self) -> u64 {
        self.store.total_quantity()
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn toast_visible(&self) -> bool {
        self.toast.is_visible()
    }

    pub fn config(&self) -> &QuickQuoteConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn storage(&self) -> &P {
        self.repo.storage()
    }

    fn commit(&mut self) {
        self.repo.save(self.store.items());
        self.render();
    }

    fn set_panel(&mut self, state: PanelState) -> Outcome {
        self.panel = state;
        let open = state == PanelState::Open;
        self.surface.set_panel_open(open);
        self.surface.set_scroll_locked(open);
        Outcome::Panel(state)
    }
}
