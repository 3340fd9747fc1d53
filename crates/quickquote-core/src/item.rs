use serde::{Deserialize, Serialize};

/// A single product line the visitor is interested in.
///
/// `quantity` is always at least 1 once the item lives in a [`QuoteStore`].
///
/// [`QuoteStore`]: crate::store::QuoteStore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Empty when the stored item predates id fallback; hydration keys it
    /// by `name` instead.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Display asset (URL or site-relative path).
    #[serde(default)]
    pub image: String,
    /// Free-text annotation shown under the name.
    #[serde(default)]
    pub details: String,
    pub quantity: u32,
}

/// The metadata an on-page "add to quote" control hands over.
///
/// Every field is optional; [`AddRequest::resolve`] fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl AddRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The key this request merges under: `id`, or `name` when `id` is
    /// absent or blank.
    pub fn key(&self) -> String {
        non_empty(self.id.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .unwrap_or_default()
            .to_string()
    }

    /// Turn the request into a fresh item with `quantity = 1`.
    pub fn resolve(self, default_image: &str) -> QuoteItem {
        let id = self.key();
        QuoteItem {
            id,
            name: self.name.unwrap_or_default(),
            image: non_empty(self.image.as_deref())
                .unwrap_or(default_image)
                .to_string(),
            details: self.details.unwrap_or_default(),
            quantity: 1,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
