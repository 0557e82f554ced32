//! Global card session.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The worker keeps the module alive, so the session lasts until the
//! page reloads.

use std::cell::RefCell;

use crate::card::sequencer::Sequencer;

thread_local! {
    static SESSION: RefCell<Sequencer> = RefCell::new(Sequencer::new());
}

/// Execute a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&Sequencer) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Execute a closure with mutable access to the session.
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Sequencer) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

/// Throw the session away and start over, as a page reload would.
pub fn reset_session() {
    SESSION.with(|s| {
        s.borrow_mut().restart();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::intro::CoverStage;

    #[test]
    fn fresh_session_is_closed() {
        reset_session();
        with_session(|s| {
            assert_eq!(s.intro().stage(), CoverStage::Closed);
            assert!(s.pending_timers().is_empty());
        });
    }

    #[test]
    fn reset_discards_progress() {
        reset_session();
        with_session_mut(|s| {
            s.open();
        });
        with_session(|s| assert_eq!(s.intro().stage(), CoverStage::Opening));
        reset_session();
        with_session(|s| assert_eq!(s.intro().stage(), CoverStage::Closed));
    }

    #[test]
    fn old_ids_stay_dead_after_reset() {
        reset_session();
        let old = with_session_mut(|s| {
            s.open();
            s.intro().pending().map(|t| t.id)
        })
        .unwrap();
        reset_session();
        with_session_mut(|s| {
            s.open();
            assert_eq!(s.fire(old), None);
            assert!(!s.is_content_visible());
        });
        reset_session();
    }
}
