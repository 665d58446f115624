use std::time::Instant;

use super::{TimerRequest, TimerTag};

/// Holds the single pending timer callback.
///
/// The runtime polls it once per idle cycle. Arming replaces nothing: a
/// callback is only armed after the previous one was taken, so at most one is
/// ever pending.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    pending: Option<(Instant, TimerTag)>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `request` relative to `now`.
    pub fn arm(&mut self, now: Instant, request: TimerRequest) {
        debug_assert!(self.pending.is_none(), "a timer callback is already pending");
        self.pending = Some((now + request.delay, request.tag));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(at, _)| at)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Removes and returns the pending tag if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<TimerTag> {
        match self.pending {
            Some((at, tag)) if at <= now => {
                self.pending = None;
                Some(tag)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
