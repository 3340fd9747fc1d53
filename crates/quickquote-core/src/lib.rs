//! Persistent quote builder for a product catalog site.
//!
//! A visitor collects product-interest items across page views. The
//! [`QuoteStore`] holds them, the [`QuoteRepository`] keeps them in host
//! storage between visits, [`view`] projects them into the sidebar's
//! regions and the [`QuickQuote`] controller ties the three to visitor
//! events.

pub mod config;
pub mod controller;
pub mod error;
pub mod item;
pub mod persist;
pub mod store;
pub mod submit;
pub mod surface;
pub mod system;
pub mod toast;
pub mod view;

pub use config::QuickQuoteConfig;
pub use controller::{Event, Outcome, PanelState, QuickQuote};
pub use error::{QuoteError, Result};
pub use item::{AddRequest, QuoteItem};
pub use persist::QuoteRepository;
pub use store::QuoteStore;
pub use surface::{MissingRegion, Region, Surface};
