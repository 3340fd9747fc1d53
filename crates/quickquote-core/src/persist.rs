//! The persistence adapter: quote items in and out of a single storage key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{QuoteError, Result};
use crate::item::QuoteItem;
use crate::system::Persistence;

/// Layout version written by [`QuoteRepository::save`].
pub const LAYOUT_VERSION: u32 = 1;

/// Storage key used when the config does not override it.
pub const DEFAULT_STORAGE_KEY: &str = "bts_quote_items";

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    items: Vec<QuoteItem>,
}

/// What may be found under the key: the versioned envelope, or the bare
/// array written by the first generation of the sidebar.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Persisted {
    Legacy(Vec<QuoteItem>),
    Versioned(Envelope),
}

/// Saves and loads the quote collection through a [`Persistence`] backend.
///
/// [`load`](Self::load) and [`save`](Self::save) never fail: problems are
/// logged and the in-memory state stays authoritative. The `try_` variants
/// expose the underlying error for hosts that want it.
pub struct QuoteRepository<P> {
    storage: P,
    key: String,
}

impl<P: Persistence> QuoteRepository<P> {
    pub fn new(storage: P) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: P, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &P {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut P {
        &mut self.storage
    }

    pub fn into_storage(self) -> P {
        self.storage
    }

    /// The previously saved collection, or empty when nothing was saved or
    /// the payload cannot be read.
    pub fn load(&self) -> Vec<QuoteItem> {
        match self.try_load() {
            Ok(items) => {
                debug!(key = %self.key, count = items.len(), "loaded quote items");
                items
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "error loading quote from storage");
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<QuoteItem>> {
        let Some(raw) = self.storage.load(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        decode(&raw)
    }

    /// Serialize and write `items`. Returns `false` if the write failed; the
    /// caller keeps going with its in-memory copy either way.
    pub fn save(&mut self, items: &[QuoteItem]) -> bool {
        match self.try_save(items) {
            Ok(()) => true,
            Err(e) => {
                error!(key = %self.key, error = %e, "error saving quote to storage");
                false
            }
        }
    }

    pub fn try_save(&mut self, items: &[QuoteItem]) -> Result<()> {
        let data = encode(items, Utc::now())?;
        self.storage.save(&self.key, &data)
    }
}

fn encode(items: &[QuoteItem], saved_at: DateTime<Utc>) -> Result<String> {
    let envelope = Envelope {
        version: LAYOUT_VERSION,
        saved_at: Some(saved_at),
        items: items.to_vec(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

fn decode(raw: &str) -> Result<Vec<QuoteItem>> {
    match serde_json::from_str::<Persisted>(raw)? {
        Persisted::Legacy(items) => {
            debug!(count = items.len(), "read legacy quote layout");
            Ok(items)
        }
        Persisted::Versioned(envelope) if envelope.version <= LAYOUT_VERSION => Ok(envelope.items),
        Persisted::Versioned(envelope) => {
            warn!(
                found = envelope.version,
                supported = LAYOUT_VERSION,
                "persisted quote was written by a newer layout"
            );
            Err(QuoteError::UnsupportedVersion {
                found: envelope.version,
                supported: LAYOUT_VERSION,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MemoryStorage;
    use proptest::prelude::*;

    fn item(id: &str, quantity: u32) -> QuoteItem {
        QuoteItem {
            id: id.to_string(),
            name: format!("{id} name"),
            image: "img.jpg".to_string(),
            details: String::new(),
            quantity,
        }
    }

    #[test]
    fn missing_key_loads_empty() {
        let repo = QuoteRepository::new(MemoryStorage::new());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn save_then_load() {
        let mut repo = QuoteRepository::new(MemoryStorage::new());
        let items = vec![item("a", 2), item("b", 1)];
        assert!(repo.save(&items));
        assert_eq!(repo.load(), items);
    }

    #[test]
    fn writes_versioned_envelope() {
        let mut repo = QuoteRepository::new(MemoryStorage::new());
        repo.save(&[item("a", 1)]);
        let raw = repo.storage().get_raw(DEFAULT_STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(value["version"], 1);
        assert!(value["saved_at"].is_string());
        assert_eq!(value["items"][0]["id"], "a");
    }

    #[test]
    fn reads_legacy_bare_array() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"fmc","name":"FMC","image":"a.jpg","details":"","quantity":3}]"#,
        );
        let repo = QuoteRepository::new(storage);
        let items = repo.load();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
    }

    #[test]
    fn legacy_array_with_idless_item_keeps_every_line() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"smc-14","name":"SMC 1/4","image":"a.jpg","details":"","quantity":3},
                {"name":"FMC","image":"b.jpg","details":"","quantity":1}]"#,
        );
        let repo = QuoteRepository::new(storage);
        let items = repo.load();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "smc-14");
        assert_eq!(items[1].id, "");

        let store = crate::store::QuoteStore::from_items(items);
        assert_eq!(store.get("smc-14").unwrap().quantity, 3);
        assert_eq!(store.get("FMC").unwrap().quantity, 1);
    }

    #[test]
    fn garbage_degrades_to_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(DEFAULT_STORAGE_KEY, "{not json");
        let repo = QuoteRepository::new(storage);
        assert!(repo.try_load().is_err());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn blank_payload_is_empty_not_error() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(DEFAULT_STORAGE_KEY, "  ");
        let repo = QuoteRepository::new(storage);
        assert!(repo.try_load().unwrap().is_empty());
    }

    #[test]
    fn newer_version_degrades_to_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(DEFAULT_STORAGE_KEY, r#"{"version":7,"items":[]}"#);
        let repo = QuoteRepository::new(storage);
        assert!(matches!(
            repo.try_load(),
            Err(QuoteError::UnsupportedVersion { found: 7, supported: 1 })
        ));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn quota_failure_is_tolerated() {
        let mut repo = QuoteRepository::new(MemoryStorage::with_quota(16));
        assert!(!repo.save(&[item("a", 1)]));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn custom_key() {
        let mut repo = QuoteRepository::with_key(MemoryStorage::new(), "other");
        repo.save(&[item("a", 1)]);
        assert!(repo.storage().get_raw("other").is_some());
        assert!(repo.storage().get_raw(DEFAULT_STORAGE_KEY).is_none());
    }

    fn arb_item() -> impl Strategy<Value = QuoteItem> {
        ("[a-z0-9-]{1,12}", "\\PC{0,24}", "\\PC{0,24}", "\\PC{0,24}", 1u32..10_000).prop_map(
            |(id, name, image, details, quantity)| QuoteItem {
                id,
                name,
                image,
                details,
                quantity,
            },
        )
    }

    proptest! {
        #[test]
        fn load_after_save_round_trips(items in prop::collection::vec(arb_item(), 0..16)) {
            let mut repo = QuoteRepository::new(MemoryStorage::new());
            prop_assert!(repo.save(&items));
            prop_assert_eq!(repo.load(), items);
        }
    }
}
