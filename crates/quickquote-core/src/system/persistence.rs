use std::collections::HashMap;

use crate::error::{QuoteError, Result};

/// Persistence platform trait — key-value string storage.
///
/// The platform interface stores raw strings. Serialization is the
/// [`QuoteRepository`](crate::persist::QuoteRepository)'s responsibility, not
/// the platform's. Unlike an in-memory map, real storage can refuse a write
/// (quota) or be unavailable entirely (privacy mode), so every call is
/// fallible.
///
/// Implementations: browser localStorage, a directory of files, memory.
pub trait Persistence {
    /// Write a string value under key.
    fn save(&mut self, key: &str, data: &str) -> Result<()>;

    /// Read a string value by key. Returns `Ok(None)` if not found.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Remove a key from storage. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process storage with an optional byte quota.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would push the total stored bytes past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Seed a raw value, bypassing the quota.
    pub fn insert_raw(&mut self, key: impl Into<String>, data: impl Into<String>) {
        self.entries.insert(key.into(), data.into());
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn used_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Persistence for MemoryStorage {
    fn save(&mut self, key: &str, data: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_excluding(key) + key.len() + data.len();
            if needed > quota {
                return Err(QuoteError::Storage {
                    key: key.to_string(),
                    message: format!("quota exceeded ({needed} > {quota} bytes)"),
                });
            }
        }
        self.entries.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
