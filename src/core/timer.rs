//! Cancellable timers on a virtual millisecond clock.
//!
//! The event loop feeds wall time in with [`TimerQueue::advance`] and then
//! drains expiries one at a time with [`TimerQueue::next_due`], so a handler
//! that cancels a timer also suppresses every later expiry of it inside the
//! same frame.
//!
//! Each timer is owned by a [`TimerHandle`]. Dropping the handle cancels the
//! timer, so whoever holds it cannot leave a callback behind.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::nav::Anchor;

/// Everything the portal schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    TransitionTick,
    TransitionComplete,
    ScrollSettle(Anchor),
    MobileWarning,
}

#[derive(Debug)]
pub struct TimerHandle {
    live: Rc<Cell<bool>>,
}

impl TimerHandle {
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.live.get()
    }

    #[cfg(test)]
    pub fn cancel(self) {}
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

#[derive(Debug)]
struct Entry<E> {
    seq: u64,
    due: u64,
    period: Option<u64>,
    event: E,
    live: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub struct TimerQueue<E> {
    now: u64,
    horizon: u64,
    next_seq: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: 0,
            horizon: 0,
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    /// Virtual time of the last expiry handed out (or of the last advance
    /// when nothing was due).
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.now)
    }

    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|e| e.live.get()).count()
    }

    pub fn after(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.schedule(millis(delay), None, event)
    }

    /// Fires every `period`, first after one full period.
    pub fn every(&mut self, period: Duration, event: E) -> TimerHandle {
        let period = millis(period).max(1);
        self.schedule(period, Some(period), event)
    }

    fn schedule(&mut self, delay: u64, period: Option<u64>, event: E) -> TimerHandle {
        let live = Rc::new(Cell::new(true));
        self.entries.push(Entry {
            seq: self.next_seq,
            due: self.now.saturating_add(delay),
            period,
            event,
            live: Rc::clone(&live),
        });
        self.next_seq += 1;
        TimerHandle { live }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.horizon = self.horizon.max(self.now).saturating_add(millis(elapsed));
    }

    /// Pops the earliest live expiry at or before the advanced horizon.
    pub fn next_due(&mut self) -> Option<E> {
        self.entries.retain(|e| e.live.get());
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= self.horizon)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i);

        let Some(idx) = idx else {
            self.now = self.horizon;
            return None;
        };

        let entry = &mut self.entries[idx];
        self.now = entry.due;
        let event = entry.event.clone();
        match entry.period {
            Some(period) => entry.due = entry.due.saturating_add(period),
            None => {
                entry.live.set(false);
                self.entries.swap_remove(idx);
            }
        }
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(q: &mut TimerQueue<&'static str>) -> Vec<(&'static str, u64)> {
        let mut out = Vec::new();
        while let Some(ev) = q.next_due() {
            out.push((ev, q.now().as_millis() as u64));
        }
        out
    }

    #[test]
    fn one_shot_fires_once_at_its_deadline() {
        let mut q = TimerQueue::new();
        let h = q.after(Duration::from_millis(100), "once");

        q.advance(Duration::from_millis(99));
        assert!(drain(&mut q).is_empty());
        assert!(h.is_active());

        q.advance(Duration::from_millis(1));
        assert_eq!(drain(&mut q), vec![("once", 100)]);
        assert!(!h.is_active());

        q.advance(Duration::from_secs(5));
        assert!(drain(&mut q).is_empty());
    }

    #[test]
    fn periodic_catches_up_within_one_advance() {
        let mut q = TimerQueue::new();
        let _h = q.every(Duration::from_millis(50), "tick");
        q.advance(Duration::from_millis(175));
        assert_eq!(drain(&mut q), vec![("tick", 50), ("tick", 100), ("tick", 150)]);
    }

    #[test]
    fn dropped_handle_never_fires() {
        let mut q = TimerQueue::new();
        let h = q.every(Duration::from_millis(10), "tick");
        drop(h);
        q.advance(Duration::from_millis(100));
        assert!(drain(&mut q).is_empty());
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn cancel_between_expiries_stops_the_rest_of_the_batch() {
        let mut q = TimerQueue::new();
        let mut h = Some(q.every(Duration::from_millis(10), "tick"));
        q.advance(Duration::from_millis(100));

        assert_eq!(q.next_due(), Some("tick"));
        if let Some(handle) = h.take() {
            handle.cancel();
        }
        assert_eq!(q.next_due(), None);
    }

    #[test]
    fn timers_scheduled_from_a_handler_use_the_expiry_time() {
        let mut q = TimerQueue::new();
        let _first = q.after(Duration::from_millis(30), "first");
        q.advance(Duration::from_millis(100));

        assert_eq!(q.next_due(), Some("first"));
        let _second = q.after(Duration::from_millis(20), "second");
        assert_eq!(q.next_due(), Some("second"));
        assert_eq!(q.now(), Duration::from_millis(50));
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        let _a = q.after(Duration::from_millis(5), "a");
        let _b = q.after(Duration::from_millis(5), "b");
        q.advance(Duration::from_millis(5));
        assert_eq!(drain(&mut q), vec![("a", 5), ("b", 5)]);
    }
}
