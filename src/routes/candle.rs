//! `/api/candle/*` routes.

use crate::card::state::with_session_mut;
use crate::routes::render;
use crate::views::candle::render_candle_stage;

fn candle_stage() -> String {
    render(|config, seq| render_candle_stage(config, seq.candle()))
}

/// Handle GET /api/candle
pub fn handle_candle_get(_query: &str) -> String {
    candle_stage()
}

/// Handle POST /api/candle/blow
/// Blowing an already blown candle just re-renders the smoke.
pub fn handle_blow_post(_body: &str) -> String {
    with_session_mut(|s| s.blow_candle());
    candle_stage()
}
