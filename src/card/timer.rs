//! Timer bookkeeping for the reveal tracks.
//!
//! The WASM side never sleeps. A scheduled transition is a `PendingTimer`
//! stored in the owning track's `TimerSlot`; the page gets a beacon element
//! that posts the timer id back after the delay. Only the id currently held
//! in a slot may fire, so re-arming a slot or cancelling it makes every older
//! beacon a no-op.

use std::fmt;
use std::str::FromStr;

use crate::error::CardError;

/// Session-unique timer identifier. Zero is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TimerId {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(id) if id > 0 => Ok(TimerId(id)),
            _ => Err(CardError::InvalidTimerId(s.to_string())),
        }
    }
}

/// Which part of the card a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Intro,
    Narrative,
    Confirmation,
    Wish,
    Share,
}

impl Track {
    pub fn as_str(self) -> &'static str {
        match self {
            Track::Intro => "intro",
            Track::Narrative => "narrative",
            Track::Confirmation => "confirmation",
            Track::Wish => "wish",
            Track::Share => "share",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "intro" => Some(Track::Intro),
            "narrative" => Some(Track::Narrative),
            "confirmation" => Some(Track::Confirmation),
            "wish" => Some(Track::Wish),
            "share" => Some(Track::Share),
            _ => None,
        }
    }
}

/// A scheduled transition waiting for its beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub track: Track,
    /// Delay as scheduled, which is what the beacon waits for.
    pub delay_ms: u64,
    /// Virtual-clock time at which the timer is due.
    pub due_at: u64,
}

/// The single pending-timer handle a track owns.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<PendingTimer>,
}

impl TimerSlot {
    /// Install `timer`, cancelling whatever was pending before.
    pub fn arm(&mut self, timer: PendingTimer) -> Option<PendingTimer> {
        let replaced = self.pending.replace(timer);
        if let Some(old) = replaced {
            tracing::debug!(track = old.track.as_str(), id = %old.id, "timer superseded");
        }
        replaced
    }

    pub fn cancel(&mut self) -> Option<PendingTimer> {
        self.pending.take()
    }

    /// Take the pending timer only if it is `id`.
    pub fn take_if(&mut self, id: TimerId) -> Option<PendingTimer> {
        match self.pending {
            Some(timer) if timer.id == id => self.pending.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.pending.as_ref()
    }

    pub fn holds(&self, id: TimerId) -> bool {
        self.pending.is_some_and(|t| t.id == id)
    }
}

/// Virtual clock and timer id allocator for one session.
#[derive(Debug)]
pub struct TimerClock {
    now: u64,
    next_id: u64,
}

impl Default for TimerClock {
    fn default() -> Self {
        Self { now: 0, next_id: 1 }
    }
}

impl TimerClock {
    /// A clock at time zero whose ids pick up where `previous` left off, so
    /// beacons from an earlier session can never match a new timer.
    pub fn following(previous: &TimerClock) -> Self {
        Self {
            now: 0,
            next_id: previous.next_id,
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Allocate a fresh timer due `delay_ms` from now.
    pub fn schedule(&mut self, track: Track, delay_ms: u64) -> PendingTimer {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        PendingTimer {
            id,
            track,
            delay_ms,
            due_at: self.now + delay_ms,
        }
    }

    /// Move the clock forward. It never goes back.
    pub fn advance_to(&mut self, t: u64) {
        self.now = self.now.max(t);
    }
}
