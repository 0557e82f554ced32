//! `/api/card/*` routes — page render, opening, timer beacons and session
//! lifecycle — plus the timeline and the audio failure report.

use crate::card::state::{reset_session, with_session_mut};
use crate::card::timer::{TimerId, Track};
use crate::routes::util::{get_param, parse_form_body};
use crate::routes::{error_html, render};
use crate::views::confetti::render_confetti;
use crate::views::cover::render_audio_start;
use crate::views::memories::render_memories_section;
use crate::views::page::render_page;
use crate::views::question::render_question_stage;
use crate::views::share::render_share_button;
use crate::views::wish::render_wish_stage;

// ── GET /api/card/page ─────────────────────────────────────────────

/// Handle GET /api/card/page
/// Cover while closed or opening, the whole card once open.
pub fn handle_page_get(_query: &str) -> String {
    render(render_page)
}

// ── POST /api/card/open ────────────────────────────────────────────

/// Handle POST /api/card/open
/// Starts the cover fade. The first call also asks the host to start the
/// music; repeated calls just re-render.
pub fn handle_open_post(_body: &str) -> String {
    let started = with_session_mut(|s| s.open());
    let mut html = render(render_page);
    if started {
        html.push_str(&render(|config, _| render_audio_start(config)));
    }
    html
}

// ── POST /api/card/tick ────────────────────────────────────────────

/// Handle POST /api/card/tick
/// Body params: `timer={id}&track={track}` as posted by a beacon.
///
/// Fires the timer if it is still the one pending on its track and returns
/// that track's section. A stale beacon gets the section as it stands.
/// The response that lands on the final answer also carries the confetti.
pub fn handle_tick_post(body: &str) -> String {
    let params = parse_form_body(body);
    let id: TimerId = match get_param(&params, "timer").unwrap_or("").parse() {
        Ok(id) => id,
        Err(e) => return error_html(&e.to_string()),
    };
    let fired = with_session_mut(|s| s.fire(id));
    if fired.is_none() {
        tracing::debug!(%id, "stale timer beacon");
    }
    let celebrate =
        fired == Some(Track::Confirmation) && with_session_mut(|s| s.take_celebration());
    match fired.or_else(|| get_param(&params, "track").and_then(Track::parse)) {
        Some(track) if celebrate => {
            let mut html = render_confetti();
            html.push_str(&render_track(track));
            html
        }
        Some(track) => render_track(track),
        None => String::new(),
    }
}

/// Current contents of the container a track renders into.
pub fn render_track(track: Track) -> String {
    match track {
        Track::Intro => render(render_page),
        Track::Narrative | Track::Confirmation => render(render_question_stage),
        Track::Wish => render(|config, seq| render_wish_stage(config, seq.wish())),
        Track::Share => render(|config, seq| render_share_button(config, seq.share())),
    }
}

// ── POST /api/card/teardown ────────────────────────────────────────

/// Handle POST /api/card/teardown
/// Sent on page hide. Leaving the page discards the card; the next page
/// render starts from a closed cover and every earlier beacon is stale.
pub fn handle_teardown_post(_body: &str) -> String {
    reset_session();
    String::new()
}

// ── POST /api/card/reset ───────────────────────────────────────────

/// Handle POST /api/card/reset
/// Fresh session, as after a reload.
pub fn handle_reset_post(_body: &str) -> String {
    reset_session();
    render(render_page)
}

// ── GET /api/memories ──────────────────────────────────────────────

/// Handle GET /api/memories
pub fn handle_memories_get(_query: &str) -> String {
    render(|config, _| render_memories_section(config))
}

// ── POST /api/audio/blocked ────────────────────────────────────────

/// Handle POST /api/audio/blocked
/// The browser refused to autoplay. Logged, never shown.
pub fn handle_audio_blocked_post(body: &str) -> String {
    let params = parse_form_body(body);
    let reason = get_param(&params, "reason").unwrap_or("unknown");
    tracing::info!(reason, "audio playback was prevented by the browser");
    String::new()
}
