//! Share button label.
//!
//! The browser does the sharing. The host reports how it went and the
//! button shows "copied" for a couple of seconds when the clipboard fallback
//! was used.

use std::str::FromStr;

use crate::card::timer::{PendingTimer, TimerClock, TimerId, TimerSlot, Track};
use crate::error::CardError;

/// How long the "copied" label stays up.
pub const COPIED_LABEL_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet completed.
    Shared,
    /// Native share dismissed or errored; only logged.
    Cancelled,
    /// Clipboard fallback succeeded.
    Copied,
    /// Clipboard fallback failed.
    Failed,
}

impl FromStr for ShareOutcome {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shared" => Ok(ShareOutcome::Shared),
            "cancelled" => Ok(ShareOutcome::Cancelled),
            "copied" => Ok(ShareOutcome::Copied),
            "failed" => Ok(ShareOutcome::Failed),
            other => Err(CardError::UnknownShareOutcome(other.to_string())),
        }
    }
}

/// What the page should do in response to a share report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareReaction {
    Nothing,
    ShowCopied,
    AlertFailure,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShareLabel {
    #[default]
    Idle,
    Copied,
}

#[derive(Debug, Default)]
pub struct ShareButton {
    label: ShareLabel,
    timer: TimerSlot,
}

impl ShareButton {
    pub fn label(&self) -> ShareLabel {
        self.label
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.timer.pending()
    }

    pub fn holds(&self, id: TimerId) -> bool {
        self.timer.holds(id)
    }

    pub fn report(&mut self, outcome: ShareOutcome, clock: &mut TimerClock) -> ShareReaction {
        match outcome {
            ShareOutcome::Shared => ShareReaction::Nothing,
            ShareOutcome::Cancelled => {
                tracing::info!("native share did not complete");
                ShareReaction::Nothing
            }
            ShareOutcome::Copied => {
                self.label = ShareLabel::Copied;
                self.timer.arm(clock.schedule(Track::Share, COPIED_LABEL_MS));
                ShareReaction::ShowCopied
            }
            ShareOutcome::Failed => {
                tracing::warn!("clipboard copy failed");
                ShareReaction::AlertFailure
            }
        }
    }

    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.timer.take_if(id).is_none() {
            return false;
        }
        self.label = ShareLabel::Idle;
        true
    }

    pub fn cancel_timer(&mut self) -> Option<PendingTimer> {
        self.timer.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copied_label_reverts_after_timer() {
        let mut clock = TimerClock::default();
        let mut button = ShareButton::default();
        assert_eq!(
            button.report(ShareOutcome::Copied, &mut clock),
            ShareReaction::ShowCopied
        );
        assert_eq!(button.label(), ShareLabel::Copied);
        let timer = *button.pending().unwrap();
        assert_eq!(timer.delay_ms, COPIED_LABEL_MS);
        assert!(button.fire(timer.id));
        assert_eq!(button.label(), ShareLabel::Idle);
    }

    #[test]
    fn second_copy_restarts_the_window() {
        let mut clock = TimerClock::default();
        let mut button = ShareButton::default();
        button.report(ShareOutcome::Copied, &mut clock);
        let first = button.pending().unwrap().id;
        button.report(ShareOutcome::Copied, &mut clock);
        assert!(!button.fire(first));
        assert_eq!(button.label(), ShareLabel::Copied);
    }

    #[test]
    fn failure_asks_for_alert() {
        let mut clock = TimerClock::default();
        let mut button = ShareButton::default();
        assert_eq!(
            button.report(ShareOutcome::Failed, &mut clock),
            ShareReaction::AlertFailure
        );
        assert_eq!(button.label(), ShareLabel::Idle);
        assert!(button.pending().is_none());
    }

    #[test]
    fn parses_outcomes() {
        assert_eq!("copied".parse::<ShareOutcome>().unwrap(), ShareOutcome::Copied);
        assert!(matches!(
            "exploded".parse::<ShareOutcome>(),
            Err(CardError::UnknownShareOutcome(_))
        ));
    }
}
