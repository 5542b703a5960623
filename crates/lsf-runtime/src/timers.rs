//! Timer queue
//!
//! `setTimeout`/`clearTimeout` on a virtual monotonic clock. Nothing here
//! reads the wall clock: the owner decides how far time moves, which lets
//! tests fast-forward and lets [`crate::driver`] follow real time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

/// Scheduled callback, run once with the queue owner's context
pub type Task<C> = Box<dyn FnOnce(&mut C)>;

/// Timer handle returned by `set_timeout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Pending timers ordered by due time, then by scheduling order
pub struct TimerQueue<C> {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<(Duration, TimerId), Task<C>>,
    due_by_id: HashMap<TimerId, Duration>,
}

impl<C> TimerQueue<C> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            entries: BTreeMap::new(),
            due_by_id: HashMap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_timeout(&mut self, delay: Duration, task: Task<C>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        self.entries.insert((due, id), task);
        self.due_by_id.insert(id, due);
        id
    }

    /// Cancel a pending timer. Returns `false` if it already ran or was cleared.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        match self.due_by_id.remove(&id) {
            Some(due) => self.entries.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    /// Take the earliest timer due at or before `until`, moving the clock to its due time
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, Task<C>)> {
        let (&(due, id), _) = self.entries.first_key_value()?;
        if due > until {
            return None;
        }
        let task = self.entries.remove(&(due, id))?;
        self.due_by_id.remove(&id);
        self.now = self.now.max(due);
        Some((id, task))
    }

    /// Move the clock forward; never backwards
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

impl<C> Default for TimerQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for TimerQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("pending", &self.entries.len())
            .finish()
    }
}
