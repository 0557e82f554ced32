//! `/api/share/*` routes — outcome reports from the host's share helper.

use crate::card::share::{ShareOutcome, ShareReaction};
use crate::card::state::with_session_mut;
use crate::routes::util::{get_param, parse_form_body};
use crate::routes::{error_html, render};
use crate::views::share::{render_share_button, render_share_failure};

fn share_button() -> String {
    render(|config, seq| render_share_button(config, seq.share()))
}

/// Handle GET /api/share/button
pub fn handle_button_get(_query: &str) -> String {
    share_button()
}

/// Handle POST /api/share/result
/// Body: `outcome=shared|cancelled|copied|failed`.
/// Returns the button (with the "copied" label when relevant), plus an
/// alert when the clipboard fallback failed.
pub fn handle_result_post(body: &str) -> String {
    let params = parse_form_body(body);
    let outcome: ShareOutcome = match get_param(&params, "outcome").unwrap_or("").parse() {
        Ok(o) => o,
        Err(e) => return error_html(&e.to_string()),
    };
    let reaction = with_session_mut(|s| s.report_share(outcome));
    let mut html = share_button();
    if reaction == ShareReaction::AlertFailure {
        html.push_str(&render(|config, _| render_share_failure(config)));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::state::reset_session;

    #[test]
    fn copied_shows_transient_label() {
        reset_session();
        let html = handle_result_post("outcome=copied");
        assert!(html.contains("Link Disalin!"));
        assert!(html.contains("/api/card/tick"));
        reset_session();
    }

    #[test]
    fn failed_alerts() {
        reset_session();
        let html = handle_result_post("outcome=failed");
        assert!(html.contains("Bagikan Ucapan Ini"));
        assert!(html.contains("alert("));
        reset_session();
    }

    #[test]
    fn shared_is_quiet() {
        reset_session();
        let html = handle_result_post("outcome=shared");
        assert!(!html.contains("alert("));
        assert_eq!(html, handle_button_get(""));
        reset_session();
    }

    #[test]
    fn unknown_outcome_is_reported() {
        reset_session();
        assert!(handle_result_post("outcome=teleported").contains("Unknown share outcome"));
        reset_session();
    }
}
