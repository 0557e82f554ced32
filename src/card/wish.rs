//! Wish capture.
//!
//! Submitting plays a short envelope animation before the thank-you shows.
//! `edit` is the only transition in the card allowed to go backwards.

use crate::card::timer::{PendingTimer, TimerClock, TimerId, TimerSlot, Track};

/// Length of the envelope animation.
pub const ENVELOPE_MS: u64 = 2800;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WishStage {
    #[default]
    Empty,
    Drafted(String),
    /// Submitted, envelope animation still playing.
    Sending(String),
    Submitted(String),
}

#[derive(Debug, Default)]
pub struct Wish {
    stage: WishStage,
    timer: TimerSlot,
}

impl Wish {
    pub fn stage(&self) -> &WishStage {
        &self.stage
    }

    pub fn text(&self) -> &str {
        match &self.stage {
            WishStage::Empty => "",
            WishStage::Drafted(t) | WishStage::Sending(t) | WishStage::Submitted(t) => t,
        }
    }

    /// Drafting is the only stage where the text can change.
    pub fn is_frozen(&self) -> bool {
        matches!(self.stage, WishStage::Sending(_) | WishStage::Submitted(_))
    }

    pub fn can_submit(&self) -> bool {
        !self.is_frozen() && !self.text().trim().is_empty()
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.timer.pending()
    }

    pub fn holds(&self, id: TimerId) -> bool {
        self.timer.holds(id)
    }

    pub fn draft(&mut self, text: &str) -> bool {
        if self.is_frozen() {
            return false;
        }
        self.stage = if text.is_empty() {
            WishStage::Empty
        } else {
            WishStage::Drafted(text.to_string())
        };
        true
    }

    pub fn submit(&mut self, text: &str, clock: &mut TimerClock) -> bool {
        if self.is_frozen() {
            return false;
        }
        if text.trim().is_empty() {
            tracing::warn!("ignoring empty wish");
            return false;
        }
        self.stage = WishStage::Sending(text.to_string());
        self.timer.arm(clock.schedule(Track::Wish, ENVELOPE_MS));
        tracing::debug!("wish sending");
        true
    }

    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.timer.take_if(id).is_none() {
            return false;
        }
        match std::mem::take(&mut self.stage) {
            WishStage::Sending(text) => {
                self.stage = WishStage::Submitted(text);
                tracing::debug!("wish delivered");
                true
            }
            other => {
                self.stage = other;
                false
            }
        }
    }

    /// Back to drafting with the text intact; cancels a pending reveal.
    pub fn edit(&mut self) -> bool {
        match std::mem::take(&mut self.stage) {
            WishStage::Sending(text) | WishStage::Submitted(text) => {
                if let Some(cancelled) = self.timer.cancel() {
                    tracing::debug!(id = %cancelled.id, "wish reveal cancelled");
                }
                self.stage = WishStage::Drafted(text);
                true
            }
            other => {
                self.stage = other;
                false
            }
        }
    }

    pub fn cancel_timer(&mut self) -> Option<PendingTimer> {
        self.timer.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_submissions_are_noops() {
        let mut clock = TimerClock::default();
        let mut wish = Wish::default();
        assert!(!wish.submit("", &mut clock));
        assert!(!wish.submit("   ", &mut clock));
        assert_eq!(wish.stage(), &WishStage::Empty);
        assert!(wish.pending().is_none());
    }

    #[test]
    fn submit_then_reveal() {
        let mut clock = TimerClock::default();
        let mut wish = Wish::default();
        assert!(wish.submit("I hope...", &mut clock));
        assert_eq!(wish.stage(), &WishStage::Sending("I hope...".into()));
        let timer = *wish.pending().unwrap();
        assert_eq!(timer.delay_ms, ENVELOPE_MS);
        assert!(wish.fire(timer.id));
        assert_eq!(wish.stage(), &WishStage::Submitted("I hope...".into()));
    }

    #[test]
    fn edit_before_reveal_cancels_it() {
        let mut clock = TimerClock::default();
        let mut wish = Wish::default();
        wish.submit("I hope...", &mut clock);
        let id = wish.pending().unwrap().id;
        assert!(wish.edit());
        assert_eq!(wish.stage(), &WishStage::Drafted("I hope...".into()));
        assert!(!wish.fire(id));
        assert_eq!(wish.stage(), &WishStage::Drafted("I hope...".into()));
    }

    #[test]
    fn frozen_while_sending() {
        let mut clock = TimerClock::default();
        let mut wish = Wish::default();
        wish.submit("first", &mut clock);
        assert!(!wish.draft("second"));
        assert!(!wish.submit("second", &mut clock));
        assert_eq!(wish.text(), "first");
        assert!(!wish.can_submit());
    }

    #[test]
    fn edit_from_drafting_is_noop() {
        let mut wish = Wish::default();
        assert!(!wish.edit());
        wish.draft("hello");
        assert!(!wish.edit());
        assert_eq!(wish.stage(), &WishStage::Drafted("hello".into()));
    }

    #[test]
    fn draft_tracks_submit_availability() {
        let mut wish = Wish::default();
        wish.draft("  ");
        assert!(!wish.can_submit());
        wish.draft("kita bahagia");
        assert!(wish.can_submit());
        wish.draft("");
        assert_eq!(wish.stage(), &WishStage::Empty);
    }
}
