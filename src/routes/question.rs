//! `/api/question/*` routes — the narrative and the Yes/No escalation.

use crate::card::state::{with_session, with_session_mut};
use crate::routes::render;
use crate::views::question::{render_no_alert, render_question_stage};

/// Handle GET /api/question
pub fn handle_question_get(_query: &str) -> String {
    render(render_question_stage)
}

/// Handle POST /api/question/begin
/// Starts the automatic narrative; the response carries the first beacon.
pub fn handle_begin_post(_body: &str) -> String {
    with_session_mut(|s| s.begin_question());
    render(render_question_stage)
}

/// Handle POST /api/question/yes
pub fn handle_yes_post(_body: &str) -> String {
    with_session_mut(|s| s.confirm_yes());
    render(render_question_stage)
}

/// Handle POST /api/question/no
/// Swapped into a hidden alert slot; the question itself is left alone.
pub fn handle_no_post(_body: &str) -> String {
    with_session(|s| s.confirm_no());
    render(|config, _| render_no_alert(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::confirmation::ConfirmationStep;
    use crate::card::intro::OPEN_REVEAL_MS;
    use crate::card::narrative::total_delay_ms;
    use crate::card::state::reset_session;

    fn at_question() {
        reset_session();
        with_session_mut(|s| {
            s.open();
            s.advance_by(OPEN_REVEAL_MS);
        });
        handle_begin_post("");
        with_session_mut(|s| {
            s.advance_by(total_delay_ms());
        });
    }

    #[test]
    fn begin_returns_first_line_with_beacon() {
        reset_session();
        with_session_mut(|s| {
            s.open();
            s.advance_by(OPEN_REVEAL_MS);
        });
        let html = handle_begin_post("");
        assert!(html.contains("narrative-line"));
        assert!(html.contains("/api/card/tick"));
        reset_session();
    }

    #[test]
    fn no_leaves_step_alone() {
        at_question();
        for _ in 0..5 {
            assert!(handle_no_post("").contains("alert("));
        }
        assert_eq!(
            with_session(|s| s.confirmation().step()),
            ConfirmationStep::Choice
        );
        assert!(handle_question_get("").contains("Will you be my girlfriend"));
        reset_session();
    }

    #[test]
    fn yes_escalates() {
        at_question();
        assert!(handle_yes_post("").contains("Apakah kamu yakin?"));
        assert!(handle_yes_post("").contains("Nggak nyesel kan?"));
        assert!(handle_yes_post("").contains("Beneran serius nih??"));
        reset_session();
    }

    #[test]
    fn yes_before_narrative_ends_is_ignored() {
        reset_session();
        with_session_mut(|s| {
            s.open();
            s.advance_by(OPEN_REVEAL_MS);
        });
        handle_begin_post("");
        let html = handle_yes_post("");
        assert!(html.contains("narrative-line"));
        assert_eq!(
            with_session(|s| s.confirmation().step()),
            ConfirmationStep::Choice
        );
        reset_session();
    }
}
