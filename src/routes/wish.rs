//! `/api/wish/*` routes.

use crate::card::state::with_session_mut;
use crate::routes::render;
use crate::routes::util::{get_param, parse_form_body};
use crate::views::wish::{render_submit_button, render_wish_stage};

fn wish_stage() -> String {
    render(|config, seq| render_wish_stage(config, seq.wish()))
}

/// Handle GET /api/wish
pub fn handle_wish_get(_query: &str) -> String {
    wish_stage()
}

/// Handle POST /api/wish/draft
/// Body: `text={draft}`. Returns only the submit button so typing never
/// replaces the textarea under the cursor.
pub fn handle_draft_post(body: &str) -> String {
    let params = parse_form_body(body);
    let text = get_param(&params, "text").unwrap_or("");
    with_session_mut(|s| s.draft_wish(text));
    render(|config, seq| render_submit_button(config, seq.wish()))
}

/// Handle POST /api/wish/submit
/// Body: `text={wish}`. Blank wishes are ignored.
pub fn handle_submit_post(body: &str) -> String {
    let params = parse_form_body(body);
    let text = get_param(&params, "text").unwrap_or("");
    with_session_mut(|s| s.submit_wish(text));
    wish_stage()
}

/// Handle POST /api/wish/edit
pub fn handle_edit_post(_body: &str) -> String {
    with_session_mut(|s| s.edit_wish());
    wish_stage()
}
