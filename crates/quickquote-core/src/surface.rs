//! The surface the projected view is written to, and the render pass.

use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::store::QuoteStore;
use crate::view::{self, AffordanceView, BadgeView, FooterView, ItemListView, QuoteView};

/// A UI region the renderer writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    ItemList,
    Footer,
    Badge,
    Affordance(String),
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::ItemList => f.write_str("item list"),
            Region::Footer => f.write_str("footer"),
            Region::Badge => f.write_str("toggle badge"),
            Region::Affordance(id) => write!(f, "affordance {id:?}"),
        }
    }
}

/// The lookup for a region came back empty.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("surface region not found: {0}")]
pub struct MissingRegion(pub Region);

/// Surface trait — where the projected view ends up (a DOM, an HTML
/// document, a test recorder).
///
/// Region writers may report [`MissingRegion`]; [`render`] logs and skips
/// those. Panel and toast state are driven by the controller directly.
pub trait Surface {
    /// Ids of the "add" controls currently on the page, in page order.
    /// The same id may appear more than once.
    fn affordance_ids(&self) -> Vec<String>;

    fn set_item_list(&mut self, view: &ItemListView) -> Result<(), MissingRegion>;
    fn set_footer(&mut self, view: &FooterView) -> Result<(), MissingRegion>;
    fn set_badge(&mut self, view: &BadgeView) -> Result<(), MissingRegion>;
    fn set_affordance(&mut self, view: &AffordanceView) -> Result<(), MissingRegion>;

    /// Reveal or hide the sidebar and its backdrop.
    fn set_panel_open(&mut self, open: bool);
    /// Block or restore scrolling of the page behind the panel.
    fn set_scroll_locked(&mut self, locked: bool);

    fn show_toast(&mut self, message: &str);
    fn hide_toast(&mut self);
}

/// Project `store` and write every region of `surface`.
pub fn render<S: Surface + ?Sized>(store: &QuoteStore, surface: &mut S) {
    let ids = surface.affordance_ids();
    let view = view::project(store, &ids);
    apply(&view, surface);
}

/// Write an already-projected view. Missing regions are logged and skipped.
pub fn apply<S: Surface + ?Sized>(view: &QuoteView, surface: &mut S) {
    let mut results = vec![
        surface.set_item_list(&view.items),
        surface.set_footer(&view.footer),
        surface.set_badge(&view.badge),
    ];
    for affordance in &view.affordances {
        results.push(surface.set_affordance(affordance));
    }
    for MissingRegion(region) in results.into_iter().filter_map(Result::err) {
        warn!(%region, "render skipped missing region");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::AddRequest;

    #[derive(Default)]
    struct Recorder {
        ids: Vec<String>,
        items: Option<ItemListView>,
        badge: Option<String>,
        affordances: Vec<AffordanceView>,
        has_footer: bool,
    }

    impl Surface for Recorder {
        fn affordance_ids(&self) -> Vec<String> {
            self.ids.clone()
        }
        fn set_item_list(&mut self, view: &ItemListView) -> Result<(), MissingRegion> {
            self.items = Some(view.clone());
            Ok(())
        }
        fn set_footer(&mut self, _view: &FooterView) -> Result<(), MissingRegion> {
            if self.has_footer {
                Ok(())
            } else {
                Err(MissingRegion(Region::Footer))
            }
        }
        fn set_badge(&mut self, view: &BadgeView) -> Result<(), MissingRegion> {
            self.badge = Some(view.text.clone());
            Ok(())
        }
        fn set_affordance(&mut self, view: &AffordanceView) -> Result<(), MissingRegion> {
            self.affordances.push(view.clone());
            Ok(())
        }
        fn set_panel_open(&mut self, _open: bool) {}
        fn set_scroll_locked(&mut self, _locked: bool) {}
        fn show_toast(&mut self, _message: &str) {}
        fn hide_toast(&mut self) {}
    }

    #[test]
    fn missing_region_does_not_stop_the_rest() {
        let mut store = QuoteStore::new();
        store.add(AddRequest::new("a", "A"));
        let mut surface = Recorder {
            ids: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        render(&store, &mut surface);
        assert_eq!(surface.badge.as_deref(), Some("1"));
        assert!(matches!(surface.items, Some(ItemListView::Rows(_))));
        assert_eq!(surface.affordances.len(), 2);
        assert!(surface.affordances[0].in_quote);
        assert!(!surface.affordances[1].in_quote);
    }

    #[test]
    fn region_display() {
        assert_eq!(Region::Affordance("x".into()).to_string(), "affordance \"x\"");
        assert_eq!(Region::Badge.to_string(), "toggle badge");
    }
}
