//! Cancellable interval timer driven by host-supplied instants

use std::time::{Duration, Instant};

/// Identifies one scheduling of an [`IntervalTimer`]
///
/// Every `start` issues a fresh token, so a fire carrying an older token can
/// be recognised as stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug)]
pub struct IntervalTimer {
    interval: Duration,
    next_due: Option<Instant>,
    active: Option<TimerToken>,
    issued: u64,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        IntervalTimer {
            interval,
            next_due: None,
            active: None,
            issued: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the first fire one interval from `now`, replacing any live schedule
    pub fn start(&mut self, now: Instant) -> TimerToken {
        self.issued += 1;
        let token = TimerToken(self.issued);
        self.active = Some(token);
        self.next_due = Some(now + self.interval);
        token
    }

    /// Stop the timer, returning the token that was live
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.next_due = None;
        self.active.take()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Token of the live schedule
    pub fn token(&self) -> Option<TimerToken> {
        self.active
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Change the interval; a running timer is rescheduled from `now`
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.active.is_some() {
            self.next_due = Some(now + interval);
        }
    }

    /// Fire at most once if the timer is due at `now`
    ///
    /// A host that fell behind gets a single fire and the next deadline is
    /// measured from `now`, so missed intervals never burst.
    pub fn poll(&mut self, now: Instant) -> Option<TimerToken> {
        let token = self.active?;
        let due = self.next_due?;
        if now < due {
            return None;
        }
        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = Some(next);
        Some(token)
    }
}
