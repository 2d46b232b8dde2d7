//! Scheduler - One-shot deferred timers on a virtual clock.
//!
//! Timers fire in due-time order; ties fire in scheduling order.
//! `now` only moves forward.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use tracing::trace;

struct Pending<E> {
    due: Duration,
    /// Scheduling sequence number, breaks due-time ties.
    seq: u64,
    event: E,
}

// Ordering ignores the payload: (due, seq) is unique per timer
impl<E> PartialEq for Pending<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Pending<E> {}

impl<E> PartialOrd for Pending<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Pending<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

/// Virtual-time timer queue.
pub struct Scheduler<E> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Pending<E>>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Scheduler<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl<E> Scheduler<E> {
    /// Create a scheduler at t = 0.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward. Earlier times are ignored.
    ///
    /// Does not fire anything; use [`pop_due`](Self::pop_due).
    pub fn advance_to(&mut self, t: Duration) {
        if t > self.now {
            self.now = t;
        }
    }

    /// Schedule `event` to fire `delay` after now.
    pub fn schedule(&mut self, delay: Duration, event: impl Into<E>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now + delay;
        trace!(timer = seq, ?due, "timer scheduled");
        self.queue.push(Reverse(Pending {
            due,
            seq,
            event: event.into(),
        }));
    }

    /// Due time of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(p)| p.due)
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Advances `now` to the timer's due time so anything the handler
    /// schedules is relative to when the timer fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<(Duration, E)> {
        match self.queue.peek() {
            Some(Reverse(p)) if p.due <= until => {}
            _ => return None,
        }
        let Reverse(pending) = self.queue.pop()?;
        self.advance_to(pending.due);
        trace!(timer = pending.seq, due = ?pending.due, "timer fired");
        Some((pending.due, pending.event))
    }

    /// Number of timers not yet fired.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
