//! The authoritative in-memory collection of quote items.
//!
//! Every operation here is a pure state transition. Persisting and
//! re-rendering after a mutation is the controller's job, which keeps these
//! transitions testable without a host.

use crate::item::{AddRequest, QuoteItem};

/// Image used when an add request carries none.
pub const DEFAULT_IMAGE: &str = "assets/images/products/stud-mount-1-1.jpg";

/// Ordered quote items, at most one per `id`, insertion order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteStore {
    items: Vec<QuoteItem>,
    default_image: String,
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }

    /// Use `image` for add requests that do not name one.
    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    /// Build a store from a hydrated collection.
    ///
    /// Items without an id are keyed by their name, duplicate ids are merged
    /// into the first occurrence (quantities summed) and zero quantities are
    /// raised to 1, so a hand-edited or corrupted
    /// payload still yields a store that satisfies its invariants.
    pub fn from_items(items: impl IntoIterator<Item = QuoteItem>) -> Self {
        let mut store = Self::new();
        store.replace(items);
        store
    }

    /// Swap the whole collection, normalising as [`QuoteStore::from_items`] does.
    pub fn replace(&mut self, items: impl IntoIterator<Item = QuoteItem>) {
        self.items.clear();
        for mut item in items {
            if item.id.is_empty() {
                item.id = item.name.clone();
            }
            item.quantity = item.quantity.max(1);
            match self.position(&item.id) {
                Some(idx) => {
                    let existing = &mut self.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => self.items.push(item),
            }
        }
    }

    /// Add one unit of the requested product.
    ///
    /// An existing item with the same key gets `quantity + 1`; otherwise a new
    /// item is appended with `quantity = 1`.
    pub fn add(&mut self, request: AddRequest) -> &[QuoteItem] {
        let key = request.key();
        match self.position(&key) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => {
                let item = request.resolve(&self.default_image);
                self.items.push(item);
            }
        }
        &self.items
    }

    /// Delete the item with `id`. Returns whether anything was removed;
    /// an absent id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Apply `delta` to the item's quantity, clamped to a floor of 1.
    ///
    /// Never removes the item. Returns `false` when `id` is absent.
    pub fn set_quantity_delta(&mut self, id: &str, delta: i64) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let item = &mut self.items[idx];
        let next = (i64::from(item.quantity)).saturating_add(delta);
        item.quantity = next.clamp(1, i64::from(u32::MAX)) as u32;
        true
    }

    /// Empty the collection. Callers are expected to have confirmed first.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// A detached copy of the collection.
    pub fn snapshot(&self) -> Vec<QuoteItem> {
        self.items.clone()
    }

    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&QuoteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, quantity: u32) -> QuoteItem {
        QuoteItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            image: String::new(),
            details: String::new(),
            quantity,
        }
    }

    #[test]
    fn add_appends_with_quantity_one() {
        let mut store = QuoteStore::new();
        let items = store.add(AddRequest::new("smc-14", "SMC 1/4"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "smc-14");
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].image, DEFAULT_IMAGE);
    }

    #[test]
    fn add_merges_by_id() {
        let mut store = QuoteStore::new();
        store.add(AddRequest::new("a", "A"));
        store.add(AddRequest::new("a", "A again"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().quantity, 2);
        // First add wins for display fields.
        assert_eq!(store.get("a").unwrap().name, "A");
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = QuoteStore::new();
        store.add(AddRequest::new("b", "B"));
        store.add(AddRequest::new("a", "A"));
        store.add(AddRequest::new("b", "B"));
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn custom_default_image() {
        let mut store = QuoteStore::new().with_default_image("x.png");
        store.add(AddRequest::new("a", "A"));
        assert_eq!(store.items()[0].image, "x.png");
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = QuoteStore::from_items([item("a", 2)]);
        let before = store.clone();
        assert!(!store.remove("zzz"));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_present() {
        let mut store = QuoteStore::from_items([item("a", 2), item("b", 1)]);
        assert!(store.remove("a"));
        assert_eq!(store.len(), 1);
        assert!(!store.contains("a"));
    }

    #[test]
    fn quantity_floor_is_one() {
        let mut store = QuoteStore::from_items([item("a", 3)]);
        assert!(store.set_quantity_delta("a", -100));
        assert_eq!(store.get("a").unwrap().quantity, 1);
        assert!(store.set_quantity_delta("a", 1));
        assert_eq!(store.get("a").unwrap().quantity, 2);
    }

    #[test]
    fn quantity_delta_on_absent_id() {
        let mut store = QuoteStore::new();
        assert!(!store.set_quantity_delta("a", 1));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut store = QuoteStore::from_items([item("a", 1), item("b", 1), item("c", 4)]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.total_quantity(), 0);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = QuoteStore::from_items([item("a", 1)]);
        let snap = store.snapshot();
        store.set_quantity_delta("a", 5);
        assert_eq!(snap[0].quantity, 1);
    }

    #[test]
    fn hydration_normalises() {
        let store = QuoteStore::from_items([item("a", 0), item("b", 2), item("a", 3)]);
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(store.get("a").unwrap().quantity, 4);
    }

    #[test]
    fn hydration_keys_idless_items_by_name() {
        let mut nameless = item("", 1);
        nameless.name = "FMC".to_string();
        let mut again = item("", 2);
        again.name = "FMC".to_string();
        let store = QuoteStore::from_items([nameless, item("fmc", 1), again]);
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["FMC", "fmc"]);
        assert_eq!(store.get("FMC").unwrap().quantity, 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Remove(u8),
        Delta(u8, i64),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0u8..6).prop_map(Op::Add),
            2 => (0u8..6).prop_map(Op::Remove),
            3 => ((0u8..6), -50i64..50).prop_map(|(k, d)| Op::Delta(k, d)),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 0..64)) {
            let mut store = QuoteStore::new();
            for op in ops {
                match op {
                    Op::Add(k) => { store.add(AddRequest::new(format!("p{k}"), "P")); }
                    Op::Remove(k) => { store.remove(&format!("p{k}")); }
                    Op::Delta(k, d) => { store.set_quantity_delta(&format!("p{k}"), d); }
                    Op::Clear => store.clear(),
                }

                let sum: u64 = store.items().iter().map(|i| u64::from(i.quantity)).sum();
                prop_assert_eq!(store.total_quantity(), sum);
                prop_assert!(store.items().iter().all(|i| i.quantity >= 1));

                let mut ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), store.len());
            }
        }

        #[test]
        fn repeated_add_counts(n in 1u32..40) {
            let mut store = QuoteStore::new();
            for _ in 0..n {
                store.add(AddRequest::new("a", "A"));
            }
            prop_assert_eq!(store.len(), 1);
            prop_assert_eq!(store.get("a").unwrap().quantity, n);
        }
    }
}
