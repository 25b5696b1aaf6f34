//! Fake "connecting to portal" progress.
//!
//! `Idle -> Transitioning -> (completion delay) -> Active`. The emulator owns
//! both of its timers; cancelling, restarting or dropping it releases them.

use std::time::Duration;

use tracing::debug;

use super::timer::{TimerEvent, TimerHandle, TimerQueue};

pub const TICK_PERIOD: Duration = Duration::from_millis(50);
pub const FIRST_VISIT_DELAY: Duration = Duration::from_millis(800);
pub const REPEAT_VISIT_DELAY: Duration = Duration::from_millis(200);
pub const REPEAT_VISIT_STEP: u8 = 15;
pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    #[default]
    Idle,
    Transitioning,
    Active,
}

/// Progress added by one tick.
pub fn increment(progress: u8, visited_before: bool) -> u8 {
    if visited_before {
        REPEAT_VISIT_STEP
    } else if progress < 50 {
        3
    } else if progress < 80 {
        1
    } else {
        4
    }
}

pub fn completion_delay(visited_before: bool) -> Duration {
    if visited_before {
        REPEAT_VISIT_DELAY
    } else {
        FIRST_VISIT_DELAY
    }
}

#[derive(Debug, Default)]
pub struct TransitionEmulator {
    mode: TransitionMode,
    progress: u8,
    visited_before: bool,
    tick: Option<TimerHandle>,
    completion: Option<TimerHandle>,
}

impl TransitionEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn visited_before(&self) -> bool {
        self.visited_before
    }

    pub fn is_transitioning(&self) -> bool {
        self.mode == TransitionMode::Transitioning
    }

    #[cfg(test)]
    /// True once progress hit 100 and only the completion delay remains.
    pub fn is_settling(&self) -> bool {
        self.completion.is_some()
    }

    pub fn start(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        self.release();
        self.mode = TransitionMode::Transitioning;
        self.progress = 0;
        self.tick = Some(timers.every(TICK_PERIOD, TimerEvent::TransitionTick));
        debug!(visited_before = self.visited_before, "transition started");
    }

    pub fn on_tick(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        if self.mode != TransitionMode::Transitioning || self.tick.is_none() {
            return;
        }
        let step = increment(self.progress, self.visited_before);
        self.progress = self.progress.saturating_add(step).min(MAX_PROGRESS);
        if self.progress == MAX_PROGRESS {
            self.tick = None;
            let delay = completion_delay(self.visited_before);
            self.completion = Some(timers.after(delay, TimerEvent::TransitionComplete));
        }
    }

    /// Returns true when this expiry moved the emulator into `Active`.
    pub fn on_complete(&mut self) -> bool {
        if self.mode != TransitionMode::Transitioning || self.completion.take().is_none() {
            return false;
        }
        self.mode = TransitionMode::Active;
        self.visited_before = true;
        debug!("transition complete");
        true
    }

    /// Abandons an in-flight transition. An `Active` emulator stays active.
    pub fn cancel(&mut self) {
        self.release();
        if self.mode == TransitionMode::Transitioning {
            self.mode = TransitionMode::Idle;
            debug!(progress = self.progress, "transition cancelled");
        }
    }

    /// Leaves the portal. The visit history is kept.
    pub fn reset(&mut self) {
        self.release();
        self.mode = TransitionMode::Idle;
    }

    fn release(&mut self) {
        self.tick = None;
        self.completion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(em: &mut TransitionEmulator, timers: &mut TimerQueue<TimerEvent>, elapsed: Duration) {
        timers.advance(elapsed);
        while let Some(ev) = timers.next_due() {
            match ev {
                TimerEvent::TransitionTick => em.on_tick(timers),
                TimerEvent::TransitionComplete => {
                    em.on_complete();
                }
                _ => {}
            }
        }
    }

    fn step(em: &mut TransitionEmulator, timers: &mut TimerQueue<TimerEvent>) {
        pump(em, timers, TICK_PERIOD);
    }

    #[test]
    fn first_visit_profile_steps() {
        assert_eq!(increment(0, false), 3);
        assert_eq!(increment(49, false), 3);
        assert_eq!(increment(50, false), 1);
        assert_eq!(increment(79, false), 1);
        assert_eq!(increment(80, false), 4);
        assert_eq!(increment(99, false), 4);
        assert_eq!(increment(0, true), 15);
    }

    #[test]
    fn first_visit_reaches_exactly_100_and_never_exceeds() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.start(&mut timers);

        let mut last = 0;
        for _ in 0..200 {
            step(&mut em, &mut timers);
            assert!(em.progress() >= last);
            assert!(em.progress() <= MAX_PROGRESS);
            last = em.progress();
            if em.is_settling() {
                break;
            }
        }
        assert_eq!(em.progress(), MAX_PROGRESS);
        assert_eq!(em.mode(), TransitionMode::Transitioning);
    }

    #[test]
    fn first_visit_waits_800_before_active() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.start(&mut timers);
        while !em.is_settling() {
            step(&mut em, &mut timers);
        }

        pump(&mut em, &mut timers, Duration::from_millis(799));
        assert_eq!(em.mode(), TransitionMode::Transitioning);
        pump(&mut em, &mut timers, Duration::from_millis(1));
        assert_eq!(em.mode(), TransitionMode::Active);
        assert!(em.visited_before());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn repeat_visit_steps_by_15_then_clamps() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.start(&mut timers);
        pump(&mut em, &mut timers, Duration::from_secs(30));
        assert_eq!(em.mode(), TransitionMode::Active);

        em.reset();
        em.start(&mut timers);
        assert_eq!(em.progress(), 0);

        let mut seen = Vec::new();
        for _ in 0..7 {
            step(&mut em, &mut timers);
            seen.push(em.progress());
        }
        assert_eq!(seen, vec![15, 30, 45, 60, 75, 90, 100]);
        assert!(em.is_settling());

        pump(&mut em, &mut timers, Duration::from_millis(199));
        assert_eq!(em.mode(), TransitionMode::Transitioning);
        pump(&mut em, &mut timers, Duration::from_millis(1));
        assert_eq!(em.mode(), TransitionMode::Active);
    }

    #[test]
    fn ticking_stops_at_100() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.visited_before = true;
        em.start(&mut timers);
        for _ in 0..7 {
            step(&mut em, &mut timers);
        }
        // only the completion timer remains
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn dropping_mid_flight_leaves_no_timer() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.start(&mut timers);
        step(&mut em, &mut timers);
        step(&mut em, &mut timers);
        drop(em);

        timers.advance(Duration::from_secs(10));
        assert_eq!(timers.next_due(), None);
    }

    #[test]
    fn cancel_freezes_state_against_late_expiries() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.start(&mut timers);
        step(&mut em, &mut timers);
        let frozen = em.progress();

        em.cancel();
        pump(&mut em, &mut timers, Duration::from_secs(10));
        assert_eq!(em.progress(), frozen);
        assert_eq!(em.mode(), TransitionMode::Idle);
        assert!(!em.visited_before());
    }

    #[test]
    fn cancel_during_completion_delay_never_activates() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.start(&mut timers);
        while !em.is_settling() {
            step(&mut em, &mut timers);
        }
        em.cancel();
        pump(&mut em, &mut timers, Duration::from_secs(5));
        assert_eq!(em.mode(), TransitionMode::Idle);
    }

    #[test]
    fn restart_resets_progress() {
        let mut timers = TimerQueue::new();
        let mut em = TransitionEmulator::new();
        em.start(&mut timers);
        for _ in 0..5 {
            step(&mut em, &mut timers);
        }
        assert_eq!(em.progress(), 15);

        em.start(&mut timers);
        assert_eq!(em.progress(), 0);
        step(&mut em, &mut timers);
        assert_eq!(em.progress(), 3);
        assert_eq!(timers.pending(), 1);
    }
}
