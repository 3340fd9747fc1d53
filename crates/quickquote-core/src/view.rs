//! Projection of store state into the sidebar's UI regions.
//!
//! All of this is pure and re-run in full after every mutation; there is no
//! diffing against the previous view.

use crate::item::QuoteItem;
use crate::store::QuoteStore;

pub const IN_QUOTE_LABEL: &str = "In Quote";
pub const ADD_LABEL: &str = "Add to Quote";

/// One listed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub details: String,
    pub image: String,
    pub quantity: u32,
}

impl From<&QuoteItem> for ItemRow {
    fn from(item: &QuoteItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            details: item.details.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemListView {
    Empty,
    Rows(Vec<ItemRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterView {
    Hidden,
    Summary { total: u64, label: String },
}

/// The count on the toggle button. Blank when the quote is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub text: String,
}

/// State of one on-page "add" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffordanceView {
    pub id: String,
    pub in_quote: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteView {
    pub items: ItemListView,
    pub footer: FooterView,
    pub badge: BadgeView,
    pub affordances: Vec<AffordanceView>,
}

/// Project `store` into every region, evaluating each affordance id present
/// on the page independently.
pub fn project(store: &QuoteStore, affordance_ids: &[String]) -> QuoteView {
    let total = store.total_quantity();
    QuoteView {
        items: item_list(store),
        footer: footer(store.is_empty(), total),
        badge: badge(total),
        affordances: affordance_ids
            .iter()
            .map(|id| affordance(store, id))
            .collect(),
    }
}

pub fn item_list(store: &QuoteStore) -> ItemListView {
    if store.is_empty() {
        ItemListView::Empty
    } else {
        ItemListView::Rows(store.items().iter().map(ItemRow::from).collect())
    }
}

pub fn footer(empty: bool, total: u64) -> FooterView {
    if empty {
        FooterView::Hidden
    } else {
        FooterView::Summary {
            total,
            label: item_count_label(total),
        }
    }
}

pub fn badge(total: u64) -> BadgeView {
    BadgeView {
        text: if total > 0 {
            total.to_string()
        } else {
            String::new()
        },
    }
}

pub fn affordance(store: &QuoteStore, id: &str) -> AffordanceView {
    let in_quote = store.contains(id);
    AffordanceView {
        id: id.to_string(),
        in_quote,
        label: if in_quote { IN_QUOTE_LABEL } else { ADD_LABEL },
    }
}

/// `"1 item"`, `"3 items"`.
pub fn item_count_label(total: u64) -> String {
    if total == 1 {
        "1 item".to_string()
    } else {
        format!("{total} items")
    }
}
