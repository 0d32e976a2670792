//! Timer queue driving roll animations
//!
//! The tray owns its clock: callers move it forward with elapsed time and the
//! queue hands back every timer that came due, earliest first. Timers that
//! fall due at the same instant come out in [`RollTimer`] order, so the
//! completion timer always runs after any flicker scheduled for that instant.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::types::DieKind;

/// Work scheduled by a roll, in the order it runs at equal due times
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RollTimer {
    /// Cosmetic face change for one die; `step` counts from 1
    Flicker { kind: DieKind, step: u32 },
    /// Authoritative end of the roll
    Complete,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    pending: BinaryHeap<Reverse<(Duration, RollTimer)>>,
}

impl TimerQueue {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule_in(&mut self, delay: Duration, timer: RollTimer) {
        self.pending.push(Reverse((self.now + delay, timer)));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to the popped timer's due time, so anything the caller
    /// schedules while handling it is relative to when it was meant to fire.
    pub fn pop_due(&mut self, until: Duration) -> Option<RollTimer> {
        let Reverse((due, _)) = self.pending.peek()?;
        if *due > until {
            return None;
        }
        let Reverse((due, timer)) = self.pending.pop()?;
        self.now = self.now.max(due);
        Some(timer)
    }

    /// Move the clock to `at` once every due timer has been handled
    pub fn settle_at(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }
}
