use tracing::debug;

use crate::surface::Surface;
use crate::system::{TimerHandle, Timers};

/// Auto-dismissing confirmation. A new message replaces the one on screen
/// and restarts the countdown; toasts never stack.
#[derive(Debug)]
pub struct Toast {
    duration_ms: u64,
    active: Option<TimerHandle>,
}

impl Toast {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            active: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn show<T, S>(&mut self, message: &str, timers: &mut T, surface: &mut S)
    where
        T: Timers + ?Sized,
        S: Surface + ?Sized,
    {
        if let Some(previous) = self.active.take() {
            timers.cancel_timeout(previous);
        }
        surface.show_toast(message);
        self.active = Some(timers.schedule_timeout(self.duration_ms));
    }

    /// Hide the toast if `handle` is its current countdown. Stale handles
    /// from replaced toasts are ignored.
    pub fn expire<S: Surface + ?Sized>(&mut self, handle: TimerHandle, surface: &mut S) -> bool {
        if self.active != Some(handle) {
            debug!(?handle, "ignoring stale toast timer");
            return false;
        }
        self.active = None;
        surface.hide_toast();
        true
    }
}
