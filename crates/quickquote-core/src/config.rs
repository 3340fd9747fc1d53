use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};
use crate::persist::DEFAULT_STORAGE_KEY;
use crate::store::DEFAULT_IMAGE;

/// Site-level settings for the quote builder.
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```json
/// { "quote_page": "contact.html", "toast_duration_ms": 3000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickQuoteConfig {
    /// Storage key holding the serialized collection.
    pub storage_key: String,
    /// Text of the confirmation shown after an add.
    pub toast_message: String,
    /// How long the toast stays visible.
    pub toast_duration_ms: u64,
    /// Quote-request page, resolved relative to the current location.
    pub quote_page: String,
    /// Query parameter carrying the formatted item list.
    pub query_param: String,
    /// Separator between formatted items.
    pub delimiter: String,
    /// Image for add requests that do not name one.
    pub default_image: String,
    /// Prompt shown before "Clear All" takes effect.
    pub confirm_clear_message: String,
}

impl Default for QuickQuoteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_message: "Added to quote".to_string(),
            toast_duration_ms: 2000,
            quote_page: "request-a-quote.html".to_string(),
            query_param: "products".to_string(),
            delimiter: ", ".to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            confirm_clear_message: "Are you sure you want to clear all items from your quote?"
                .to_string(),
        }
    }
}

impl QuickQuoteConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_storage_key(&self.storage_key) {
            return Err(QuoteError::Config {
                message: format!(
                    "storage_key {:?} must be ASCII letters, digits, '_', '-' or '.', \
                     and must not start with '.'",
                    self.storage_key
                ),
            });
        }
        if self.query_param.is_empty() {
            return Err(QuoteError::Config {
                message: "query_param must not be empty".to_string(),
            });
        }
        if self.quote_page.is_empty() {
            return Err(QuoteError::Config {
                message: "quote_page must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Storage keys double as file names for file-backed hosts, so they are
/// limited to a portable charset.
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
