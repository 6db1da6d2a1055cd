// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::Duration;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub loading_delay: Duration,
    pub toast_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            loading_delay: DEFAULT_LOADING_DELAY,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

/// Identifies one arm of a [`TimerSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

/// A single-occupancy timer. Arming replaces whatever was pending, and only
/// the token from the latest arm is accepted by [`TimerSlot::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerSlot {
    generation: u64,
    pending: Option<TimerToken>,
}

impl TimerSlot {
    pub fn arm(&mut self) -> TimerToken {
        self.generation = self.generation.saturating_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns true when `token` is the pending arm, disarming the slot.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimerSlot;

    #[test]
    fn rearming_invalidates_previous_token() {
        let mut slot = TimerSlot::default();
        let first = slot.arm();
        let second = slot.arm();
        assert_ne!(first, second);
        assert!(!slot.fire(first));
        assert!(slot.fire(second));
        assert!(!slot.fire(second));
    }

    #[test]
    fn token_fires_at_most_once() {
        let mut slot = TimerSlot::default();
        let token = slot.arm();
        assert!(slot.fire(token));
        assert!(!slot.fire(token));
    }

    #[test]
    fn cancel_discards_pending_token() {
        let mut slot = TimerSlot::default();
        let token = slot.arm();
        slot.cancel();
        assert!(!slot.fire(token));
        let next = slot.arm();
        assert!(next > token);
        assert!(slot.fire(next));
    }
}
