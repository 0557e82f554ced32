//! Confirmation track: the Yes/No question and its escalation.
//!
//! ```text
//! 0 Choice ─click→ 1 Sure ─click→ 2 NoRegrets ─click→ 3 Serious ─click→
//! 4 Promise ─2000ms→ 5 Salting ─2500ms→ 6 Final (celebration armed)
//! ```
//!
//! "No" never moves the track.

use crate::card::timer::{PendingTimer, TimerClock, TimerId, TimerSlot, Track};

/// Escalation prompts shown between the first "Yes" and the salting step.
pub const ESCALATION_STEPS: usize = 4;

pub const PROMISE_HOLD_MS: u64 = 2000;
pub const SALTING_HOLD_MS: u64 = 2500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfirmationStep {
    #[default]
    Choice,
    Sure,
    NoRegrets,
    Serious,
    Promise,
    Salting,
    Final,
}

/// How a step is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Click(ConfirmationStep),
    After(u64, ConfirmationStep),
    Terminal,
}

impl ConfirmationStep {
    pub fn get(self) -> u8 {
        self as u8
    }

    pub fn advance(self) -> Advance {
        use ConfirmationStep::*;
        match self {
            Choice => Advance::Click(Sure),
            Sure => Advance::Click(NoRegrets),
            NoRegrets => Advance::Click(Serious),
            Serious => Advance::Click(Promise),
            Promise => Advance::After(PROMISE_HOLD_MS, Salting),
            Salting => Advance::After(SALTING_HOLD_MS, Final),
            Final => Advance::Terminal,
        }
    }

    /// Index into the configured escalation prompts, for steps 1..=4.
    pub fn escalation_index(self) -> Option<usize> {
        match self.get() {
            n @ 1..=4 => Some(n as usize - 1),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Confirmation {
    step: ConfirmationStep,
    timer: TimerSlot,
    celebration_armed: bool,
    celebration_shown: bool,
}

impl Confirmation {
    pub fn step(&self) -> ConfirmationStep {
        self.step
    }

    pub fn celebration_armed(&self) -> bool {
        self.celebration_armed
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.timer.pending()
    }

    /// Claim the confetti. Only the first call after arming gets it.
    pub fn take_celebration(&mut self) -> bool {
        if !self.celebration_armed || self.celebration_shown {
            return false;
        }
        self.celebration_shown = true;
        true
    }

    pub fn holds(&self, id: TimerId) -> bool {
        self.timer.holds(id)
    }

    /// A "Yes" click. Ignored on steps that advance by themselves.
    pub fn yes(&mut self, clock: &mut TimerClock) -> bool {
        match self.step.advance() {
            Advance::Click(next) => {
                self.enter(next, clock);
                true
            }
            _ => false,
        }
    }

    pub fn fire(&mut self, id: TimerId, clock: &mut TimerClock) -> bool {
        if self.timer.take_if(id).is_none() {
            return false;
        }
        match self.step.advance() {
            Advance::After(_, next) => {
                self.enter(next, clock);
                true
            }
            _ => false,
        }
    }

    pub fn cancel_timer(&mut self) -> Option<PendingTimer> {
        self.timer.cancel()
    }

    fn enter(&mut self, step: ConfirmationStep, clock: &mut TimerClock) {
        self.step = step;
        tracing::debug!(step = step.get(), "confirmation step");
        match step.advance() {
            Advance::After(delay, _) => {
                self.timer.arm(clock.schedule(Track::Confirmation, delay));
            }
            Advance::Terminal => {
                self.timer.cancel();
                self.arm_celebration();
            }
            Advance::Click(_) => {}
        }
    }

    /// Returns `true` only the first time.
    fn arm_celebration(&mut self) -> bool {
        if self.celebration_armed {
            return false;
        }
        self.celebration_armed = true;
        tracing::info!("celebration armed");
        true
    }
}
