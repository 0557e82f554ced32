//! Cover overlay track: closed → opening → open.
//!
//! Opening lets the overlay fade for a fixed second before the main content
//! mounts.

use crate::card::timer::{PendingTimer, TimerClock, TimerId, TimerSlot, Track};

/// Time between pressing "open" and the content mounting.
pub const OPEN_REVEAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoverStage {
    Closed,
    Opening,
    Open,
}

#[derive(Debug)]
pub struct Intro {
    stage: CoverStage,
    timer: TimerSlot,
}

impl Default for Intro {
    fn default() -> Self {
        Self {
            stage: CoverStage::Closed,
            timer: TimerSlot::default(),
        }
    }
}

impl Intro {
    pub fn stage(&self) -> CoverStage {
        self.stage
    }

    pub fn is_content_visible(&self) -> bool {
        self.stage == CoverStage::Open
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.timer.pending()
    }

    /// Start opening. Returns `false` if the cover was already opened.
    pub fn open(&mut self, clock: &mut TimerClock) -> bool {
        if self.stage != CoverStage::Closed {
            return false;
        }
        self.stage = CoverStage::Opening;
        self.timer.arm(clock.schedule(Track::Intro, OPEN_REVEAL_MS));
        tracing::debug!("cover opening");
        true
    }

    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.timer.take_if(id).is_none() {
            return false;
        }
        self.stage = CoverStage::Open;
        tracing::debug!("content visible");
        true
    }

    pub fn holds(&self, id: TimerId) -> bool {
        self.timer.holds(id)
    }

    pub fn cancel_timer(&mut self) -> Option<PendingTimer> {
        self.timer.cancel()
    }
}
