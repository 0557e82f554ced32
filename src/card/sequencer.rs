//! The reveal sequencer: every track of the card plus the clock they share.
//!
//! User actions arrive as method calls, elapsed time arrives as `fire(id)`
//! from a beacon or as `advance_by(ms)` when the caller drives time itself.
//! The content tracks (candle, question, wish) only respond once the cover
//! has fully opened, matching what the page can actually show.

use crate::card::candle::Candle;
use crate::card::confirmation::Confirmation;
use crate::card::intro::Intro;
use crate::card::narrative::Narrative;
use crate::card::share::{ShareButton, ShareOutcome, ShareReaction};
use crate::card::timer::{PendingTimer, TimerClock, TimerId, Track};
use crate::card::wish::Wish;

#[derive(Debug, Default)]
pub struct Sequencer {
    clock: TimerClock,
    intro: Intro,
    candle: Candle,
    narrative: Narrative,
    confirmation: Confirmation,
    wish: Wish,
    share: ShareButton,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    pub fn intro(&self) -> &Intro {
        &self.intro
    }

    pub fn candle(&self) -> &Candle {
        &self.candle
    }

    pub fn narrative(&self) -> &Narrative {
        &self.narrative
    }

    pub fn confirmation(&self) -> &Confirmation {
        &self.confirmation
    }

    pub fn wish(&self) -> &Wish {
        &self.wish
    }

    pub fn share(&self) -> &ShareButton {
        &self.share
    }

    pub fn is_content_visible(&self) -> bool {
        self.intro.is_content_visible()
    }

    // ── User actions ───────────────────────────────────────────────

    /// Open the cover. Returns `true` when this call started the opening,
    /// which is also when the host should try to start the music.
    pub fn open(&mut self) -> bool {
        self.intro.open(&mut self.clock)
    }

    pub fn blow_candle(&mut self) -> bool {
        self.is_content_visible() && self.candle.blow()
    }

    pub fn begin_question(&mut self) -> bool {
        self.is_content_visible() && self.narrative.begin(&mut self.clock)
    }

    /// "Yes" only counts once the narrative has handed over.
    pub fn confirm_yes(&mut self) -> bool {
        if !self.narrative.step().is_terminal() {
            return false;
        }
        self.confirmation.yes(&mut self.clock)
    }

    /// "No" is a dead end on purpose; nothing changes.
    pub fn confirm_no(&self) {
        tracing::debug!(step = self.confirmation.step().get(), "no clicked");
    }

    pub fn draft_wish(&mut self, text: &str) -> bool {
        self.is_content_visible() && self.wish.draft(text)
    }

    pub fn submit_wish(&mut self, text: &str) -> bool {
        self.is_content_visible() && self.wish.submit(text, &mut self.clock)
    }

    pub fn edit_wish(&mut self) -> bool {
        self.wish.edit()
    }

    pub fn report_share(&mut self, outcome: ShareOutcome) -> ShareReaction {
        self.share.report(outcome, &mut self.clock)
    }

    // ── Time ───────────────────────────────────────────────────────

    /// Every timer currently pending, earliest first.
    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        let mut timers: Vec<PendingTimer> = [
            self.intro.pending(),
            self.narrative.pending(),
            self.confirmation.pending(),
            self.wish.pending(),
            self.share.pending(),
        ]
        .into_iter()
        .flatten()
        .copied()
        .collect();
        timers.sort_by_key(|t| (t.due_at, t.id));
        timers
    }

    /// The track whose pending timer is `id`, if any.
    pub fn track_of(&self, id: TimerId) -> Option<Track> {
        if self.intro.holds(id) {
            Some(Track::Intro)
        } else if self.narrative.holds(id) {
            Some(Track::Narrative)
        } else if self.confirmation.holds(id) {
            Some(Track::Confirmation)
        } else if self.wish.holds(id) {
            Some(Track::Wish)
        } else if self.share.holds(id) {
            Some(Track::Share)
        } else {
            None
        }
    }

    /// Fire timer `id`. Stale, cancelled or unknown ids do nothing and
    /// return `None`.
    pub fn fire(&mut self, id: TimerId) -> Option<Track> {
        let track = self.track_of(id)?;
        if let Some(timer) = self.pending_timers().into_iter().find(|t| t.id == id) {
            self.clock.advance_to(timer.due_at);
        }
        let fired = match track {
            Track::Intro => self.intro.fire(id),
            Track::Narrative => self.narrative.fire(id, &mut self.clock),
            Track::Confirmation => self.confirmation.fire(id, &mut self.clock),
            Track::Wish => self.wish.fire(id),
            Track::Share => self.share.fire(id),
        };
        fired.then_some(track)
    }

    /// Let `ms` pass, firing every timer that falls due in order, including
    /// timers armed along the way. Returns the tracks fired, in order.
    pub fn advance_by(&mut self, ms: u64) -> Vec<Track> {
        let target = self.clock.now() + ms;
        let mut fired = Vec::new();
        while let Some(next) = self
            .pending_timers()
            .into_iter()
            .next()
            .filter(|t| t.due_at <= target)
        {
            if let Some(track) = self.fire(next.id) {
                fired.push(track);
            }
        }
        self.clock.advance_to(target);
        fired
    }

    /// Cancel everything pending. Late beacons become no-ops.
    pub fn teardown(&mut self) -> usize {
        let cancelled = [
            self.intro.cancel_timer(),
            self.narrative.cancel_timer(),
            self.confirmation.cancel_timer(),
            self.wish.cancel_timer(),
            self.share.cancel_timer(),
        ]
        .into_iter()
        .flatten()
        .count();
        tracing::debug!(cancelled, "sequencer torn down");
        cancelled
    }

    /// Discard every track and start from a closed cover. Timer ids keep
    /// counting so beacons left over from before are stale.
    pub fn restart(&mut self) {
        self.teardown();
        *self = Sequencer {
            clock: TimerClock::following(&self.clock),
            ..Sequencer::default()
        };
    }

    /// `true` exactly once, for the response that first shows the final
    /// answer.
    pub fn take_celebration(&mut self) -> bool {
        self.confirmation.take_celebration()
    }
}
