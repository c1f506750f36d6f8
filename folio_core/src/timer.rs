//! Bookkeeping for self-rescheduling browser callbacks.
//!
//! A component that chains `setTimeout` or `requestAnimationFrame` calls
//! keeps at most one pending handle. On teardown that handle has to be
//! cancelled, and a callback that was already queued must not schedule
//! another one. [`TimerSlot`] tracks both, generic over the handle type so
//! it runs on the host with plain integers.

/// The single pending callback of one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSlot<H> {
    pending: Option<H>,
    disposed: bool,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self {
            pending: None,
            disposed: false,
        }
    }
}

impl<H> TimerSlot<H> {
    /// Whether a new callback may be scheduled.
    pub fn is_live(&self) -> bool {
        !self.disposed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a freshly scheduled callback.
    ///
    /// Returns a handle the caller must cancel right away: the one passed
    /// in when the slot is already disposed, otherwise a stale handle it
    /// replaced.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        if self.disposed {
            return Some(handle);
        }
        self.pending.replace(handle)
    }

    /// The pending callback is running now. Returns `false` when the owner
    /// is gone and the callback must do nothing.
    pub fn fire(&mut self) -> bool {
        self.pending = None;
        !self.disposed
    }

    /// Owner teardown. Returns the handle still waiting to run, if any;
    /// every later [`TimerSlot::arm`] hands its handle straight back.
    pub fn dispose(&mut self) -> Option<H> {
        self.disposed = true;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arm_then_fire_clears_the_handle() {
        let mut slot = TimerSlot::default();
        assert_eq!(slot.arm(1), None);
        assert!(slot.is_pending());
        assert!(slot.fire());
        assert!(!slot.is_pending());
    }

    #[test]
    fn rearming_hands_back_the_stale_handle() {
        let mut slot = TimerSlot::default();
        slot.arm(1);
        assert_eq!(slot.arm(2), Some(1));
        assert_eq!(slot.dispose(), Some(2));
    }

    #[test]
    fn dispose_returns_pending_handle_once() {
        let mut slot = TimerSlot::default();
        slot.arm(7);
        assert_eq!(slot.dispose(), Some(7));
        assert_eq!(slot.dispose(), None);
        assert!(!slot.is_live());
    }

    #[test]
    fn nothing_runs_or_schedules_after_dispose() {
        let mut slot: TimerSlot<u32> = TimerSlot::default();
        slot.arm(3);
        slot.dispose();
        // A callback already queued by the browser still fires once.
        assert!(!slot.fire());
        assert_eq!(slot.arm(4), Some(4));
        assert!(!slot.is_pending());
    }
}
