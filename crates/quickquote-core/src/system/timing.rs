/// Opaque handle to a scheduled timeout (0 = invalid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Timing platform trait — one-shot deferred callbacks.
///
/// The quote builder only needs fire-and-forget timeouts for the toast. The
/// host keeps the handle and, when the delay elapses, feeds it back to the
/// controller as [`Event::TimerFired`](crate::controller::Event::TimerFired).
pub trait Timers {
    /// Schedule a timeout `delay_ms` from now.
    fn schedule_timeout(&mut self, delay_ms: u64) -> TimerHandle;

    /// Cancel a pending timeout. Safe to call on an expired handle.
    fn cancel_timeout(&mut self, handle: TimerHandle);
}

/// A virtual clock: timeouts fire only when [`ManualTimers::advance`] moves
/// time past their deadline.
#[derive(Debug, Default)]
pub struct ManualTimers {
    now_ms: u64,
    next_id: u64,
    pending: Vec<(TimerHandle, u64)>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return the handles that expired, in
    /// deadline order.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerHandle> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let now = self.now_ms;
        let mut fired: Vec<(TimerHandle, u64)> = Vec::new();
        self.pending.retain(|&(handle, due)| {
            if due <= now {
                fired.push((handle, due));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|&(handle, due)| (due, handle));
        fired.into_iter().map(|(handle, _)| handle).collect()
    }
}

impl Timers for ManualTimers {
    fn schedule_timeout(&mut self, delay_ms: u64) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending
            .push((handle, self.now_ms.saturating_add(delay_ms)));
        handle
    }

    fn cancel_timeout(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }
}
