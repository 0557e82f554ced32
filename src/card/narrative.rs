//! Automatic narrative track leading up to the question.
//!
//! Step 0 is "not started", steps 1..=8 each reveal one more line and hold it
//! for that step's delay, step 9 is terminal and hands over to the
//! confirmation track.

use crate::card::timer::{PendingTimer, TimerClock, TimerId, TimerSlot, Track};

/// One narrative line per automatic step.
pub const NARRATIVE_LINES: usize = 8;

/// How long each step stays on screen before the next line, indexed by
/// `step - 1`.
pub const STEP_DELAYS_MS: [u64; NARRATIVE_LINES] = [2000, 2500, 3000, 2500, 3500, 2000, 1500, 3000];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct NarrativeStep(u8);

impl NarrativeStep {
    pub const NOT_STARTED: NarrativeStep = NarrativeStep(0);
    pub const FIRST: NarrativeStep = NarrativeStep(1);
    pub const TERMINAL: NarrativeStep = NarrativeStep(NARRATIVE_LINES as u8 + 1);

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_started(self) -> bool {
        self.0 > 0
    }

    pub fn is_terminal(self) -> bool {
        self == Self::TERMINAL
    }

    /// Delay before leaving this step, if it advances on its own.
    pub fn delay_ms(self) -> Option<u64> {
        match self.0 {
            1..=8 => Some(STEP_DELAYS_MS[self.0 as usize - 1]),
            _ => None,
        }
    }

    /// The step an elapsed timer moves to.
    pub fn next(self) -> Option<NarrativeStep> {
        match self.0 {
            1..=8 => Some(NarrativeStep(self.0 + 1)),
            _ => None,
        }
    }

    /// Number of narrative lines on screen at this step.
    pub fn visible_lines(self) -> usize {
        (self.0 as usize).min(NARRATIVE_LINES)
    }
}

/// Sum of every step's delay: time from step 1 to the terminal step.
pub fn total_delay_ms() -> u64 {
    STEP_DELAYS_MS.iter().sum()
}

#[derive(Debug, Default)]
pub struct Narrative {
    step: NarrativeStep,
    timer: TimerSlot,
}

impl Narrative {
    pub fn step(&self) -> NarrativeStep {
        self.step
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.timer.pending()
    }

    pub fn holds(&self, id: TimerId) -> bool {
        self.timer.holds(id)
    }

    /// Start at step 1. Only valid from step 0.
    pub fn begin(&mut self, clock: &mut TimerClock) -> bool {
        if self.step.is_started() {
            return false;
        }
        self.enter(NarrativeStep::FIRST, clock);
        true
    }

    pub fn fire(&mut self, id: TimerId, clock: &mut TimerClock) -> bool {
        if self.timer.take_if(id).is_none() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.enter(next, clock);
                true
            }
            None => false,
        }
    }

    pub fn cancel_timer(&mut self) -> Option<PendingTimer> {
        self.timer.cancel()
    }

    fn enter(&mut self, step: NarrativeStep, clock: &mut TimerClock) {
        self.step = step;
        tracing::debug!(step = step.get(), "narrative step");
        match step.delay_ms() {
            Some(delay) => {
                self.timer.arm(clock.schedule(Track::Narrative, delay));
            }
            None => {
                self.timer.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_pending(narrative: &mut Narrative, clock: &mut TimerClock) -> bool {
        let timer = *narrative.pending().unwrap();
        clock.advance_to(timer.due_at);
        narrative.fire(timer.id, clock)
    }

    #[test]
    fn delays_are_per_step_and_within_range() {
        assert!(STEP_DELAYS_MS.iter().all(|d| (1500..=3500).contains(d)));
        assert!(STEP_DELAYS_MS.windows(2).any(|w| w[0] != w[1]));
        assert_eq!(total_delay_ms(), 20_000);
        assert_eq!(NarrativeStep(3).delay_ms(), Some(3000));
        assert_eq!(NarrativeStep::TERMINAL.delay_ms(), None);
        assert_eq!(NarrativeStep::NOT_STARTED.delay_ms(), None);
    }

    #[test]
    fn begin_only_from_zero() {
        let mut clock = TimerClock::default();
        let mut narrative = Narrative::default();
        assert!(narrative.begin(&mut clock));
        assert_eq!(narrative.step(), NarrativeStep::FIRST);
        assert_eq!(narrative.pending().map(|t| t.delay_ms), Some(2000));
        assert!(!narrative.begin(&mut clock));
        assert_eq!(narrative.step(), NarrativeStep::FIRST);
    }

    #[test]
    fn walks_every_step_once_to_terminal() {
        let mut clock = TimerClock::default();
        let mut narrative = Narrative::default();
        narrative.begin(&mut clock);
        let mut seen = vec![narrative.step().get()];
        while narrative.pending().is_some() {
            assert!(fire_pending(&mut narrative, &mut clock));
            seen.push(narrative.step().get());
        }
        assert_eq!(seen, (1..=9).collect::<Vec<u8>>());
        assert!(narrative.step().is_terminal());
        assert_eq!(clock.now(), total_delay_ms());
    }

    #[test]
    fn stale_id_does_not_advance() {
        let mut clock = TimerClock::default();
        let mut narrative = Narrative::default();
        narrative.begin(&mut clock);
        let first = narrative.pending().unwrap().id;
        fire_pending(&mut narrative, &mut clock);
        assert!(!narrative.fire(first, &mut clock));
        assert_eq!(narrative.step().get(), 2);
    }

    #[test]
    fn visible_lines_cap_at_eight() {
        assert_eq!(NarrativeStep::NOT_STARTED.visible_lines(), 0);
        assert_eq!(NarrativeStep(4).visible_lines(), 4);
        assert_eq!(NarrativeStep::TERMINAL.visible_lines(), 8);
    }
}
