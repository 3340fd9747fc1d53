//! Host capabilities the quote builder needs, one trait per concern.
//!
//! A browser host backs these with localStorage, `setTimeout`, `confirm()`
//! and `location.href`; the CLI and the tests supply their own.

pub mod dialog;
pub mod navigation;
pub mod persistence;
pub mod timing;

pub use dialog::Dialog;
pub use navigation::{Navigator, RecordingNavigator};
pub use persistence::{MemoryStorage, Persistence};
pub use timing::{ManualTimers, TimerHandle, Timers};
