//! Deferred callbacks on a single-threaded virtual clock.
//!
//! Timers carry a payload instead of a closure; whoever drains the
//! scheduler dispatches the payload to its owner. The clock only moves when
//! the driver calls [`Scheduler::pop_due`] or [`Scheduler::settle`], which
//! keeps every schedule deterministic under test.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Identity of one scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CancelHandle(u64);

/// The timer capability consumed by the motion engine and the form controller.
pub trait TimerFacility<T> {
    /// Current clock time, relative to the scheduler's origin.
    fn now(&self) -> Duration;

    /// Run `payload` after `delay` from [`TimerFacility::now`].
    fn schedule(&mut self, delay: Duration, payload: T) -> CancelHandle;

    /// Cancel a pending entry. Returns `false` if it already fired or was
    /// cancelled before.
    fn cancel(&mut self, handle: CancelHandle) -> bool;
}

/// An entry popped from the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    pub handle: CancelHandle,
    pub at: Duration,
    pub payload: T,
}

pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), T>,
    due: HashMap<u64, Duration>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            due: HashMap::new(),
        }
    }

    /// Pop the earliest entry due at or before `until`.
    ///
    /// Ties are broken by scheduling order. The clock moves to the entry's
    /// due time, so anything scheduled while handling it is relative to the
    /// exact moment it was meant to fire.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<T>> {
        let (&(at, id), _) = self.queue.iter().next()?;
        if at > until {
            return None;
        }
        let payload = self.queue.remove(&(at, id))?;
        self.due.remove(&id);
        self.now = self.now.max(at);
        Some(Fired {
            handle: CancelHandle(id),
            at,
            payload,
        })
    }

    /// Advance the clock to `until` without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Due time of a pending entry.
    pub fn due_at(&self, handle: CancelHandle) -> Option<Duration> {
        self.due.get(&handle.0).copied()
    }

    pub fn is_pending(&self, handle: CancelHandle) -> bool {
        self.due.contains_key(&handle.0)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Pending entries in firing order.
    pub fn pending(&self) -> impl Iterator<Item = (CancelHandle, Duration, &T)> {
        self.queue
            .iter()
            .map(|(&(at, id), payload)| (CancelHandle(id), at, payload))
    }

    /// Due time of the next entry, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|&(at, _)| at)
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerFacility<T> for Scheduler<T> {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, payload: T) -> CancelHandle {
        let id = self.next_id;
        self.next_id += 1;
        let at = self.now + delay;
        self.queue.insert((at, id), payload);
        self.due.insert(id, at);
        CancelHandle(id)
    }

    fn cancel(&mut self, handle: CancelHandle) -> bool {
        match self.due.remove(&handle.0) {
            Some(at) => self.queue.remove(&(at, handle.0)).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_in_due_order_then_schedule_order() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(200), "late");
        timers.schedule(ms(100), "first");
        timers.schedule(ms(100), "second");

        let mut fired = Vec::new();
        while let Some(entry) = timers.pop_due(ms(1_000)) {
            fired.push((entry.at, entry.payload));
        }
        assert_eq!(
            fired,
            vec![(ms(100), "first"), (ms(100), "second"), (ms(200), "late")]
        );
    }

    #[test]
    fn does_not_fire_before_due() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(100), ());
        assert!(timers.pop_due(ms(99)).is_none());
        assert!(timers.pop_due(ms(100)).is_some());
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let mut timers = Scheduler::new();
        let handle = timers.schedule(ms(50), "x");
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.pop_due(ms(500)).is_none());
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn cancelling_a_fired_handle_is_a_no_op() {
        let mut timers = Scheduler::new();
        let handle = timers.schedule(ms(10), 1);
        let other = timers.schedule(ms(20), 2);
        assert!(timers.pop_due(ms(10)).is_some());
        assert!(!timers.cancel(handle));
        assert!(timers.is_pending(other));
    }

    #[test]
    fn clock_follows_fired_entries() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(100), ());
        let fired = timers.pop_due(ms(400)).unwrap();
        assert_eq!(fired.at, ms(100));
        assert_eq!(timers.now(), ms(100));

        let nested = timers.schedule(ms(50), ());
        assert_eq!(timers.due_at(nested), Some(ms(150)));

        timers.settle(ms(400));
        assert_eq!(timers.now(), ms(400));
        timers.settle(ms(10));
        assert_eq!(timers.now(), ms(400));
    }
}
