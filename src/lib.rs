//! Sweetheart card in-browser WASM server.
//!
//! Exports `init(config, seed)` and `handle_request(method, path, query, body)`
//! for the Service Worker bridge to call. Uses `matchit` for URL routing,
//! the same router engine that powers Axum.
//!
//! The card reveals itself in timed steps. Every delay is a timer on the
//! session's virtual clock; each pending timer is rendered as a beacon
//! element that posts back to `/api/card/tick` once its delay elapses.

use wasm_bindgen::prelude::*;

pub mod card;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod views;

use crate::config::CardConfig;

/// Configure the card and start a fresh session.
///
/// # Arguments
/// * `config_json` — JSON override of the card content; empty for defaults.
/// * `seed`        — seed for the decorative random values.
///
/// # Returns
/// `"ok"`, or `"error: <reason>"` if the config was rejected. A rejected
/// config leaves the previous one in place.
#[wasm_bindgen]
pub fn init(config_json: &str, seed: u32) -> String {
    let config = match CardConfig::from_json(config_json) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "card config rejected");
            return format!("error: {e}");
        }
    };
    let level = config.log_level;
    config::install(config);
    if !logging::init(level) {
        tracing::debug!("logger already installed");
    }
    views::cosmetic::reseed(u64::from(seed));
    card::state::reset_session();
    tracing::info!(seed, "card initialised");
    "ok".to_string()
}

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method (e.g., "GET", "POST")
/// * `path`   — URL path (e.g., "/api/card/page")
/// * `query`  — Query string (e.g., "?reason=NotAllowedError")
/// * `body`   — Request body (e.g., POST form data). Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // Build the router. matchit compiles route patterns into a radix tree.
    let mut router = matchit::Router::new();

    // Register routes — the value is a &str tag we match on below
    router.insert("/api/card/page", "card_page").ok();
    router.insert("/api/card/open", "card_open").ok();
    router.insert("/api/card/tick", "card_tick").ok();
    router.insert("/api/card/teardown", "card_teardown").ok();
    router.insert("/api/card/reset", "card_reset").ok();

    router.insert("/api/candle", "candle").ok();
    router.insert("/api/candle/blow", "candle_blow").ok();

    router.insert("/api/question", "question").ok();
    router.insert("/api/question/begin", "question_begin").ok();
    router.insert("/api/question/yes", "question_yes").ok();
    router.insert("/api/question/no", "question_no").ok();

    router.insert("/api/wish", "wish").ok();
    router.insert("/api/wish/draft", "wish_draft").ok();
    router.insert("/api/wish/submit", "wish_submit").ok();
    router.insert("/api/wish/edit", "wish_edit").ok();

    router.insert("/api/memories", "memories").ok();
    router.insert("/api/share/button", "share_button").ok();
    router.insert("/api/share/result", "share_result").ok();
    router.insert("/api/audio/blocked", "audio_blocked").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            // GET routes
            ("card_page", "GET") => routes::card::handle_page_get(query),
            ("candle", "GET") => routes::candle::handle_candle_get(query),
            ("question", "GET") => routes::question::handle_question_get(query),
            ("wish", "GET") => routes::wish::handle_wish_get(query),
            ("memories", "GET") => routes::card::handle_memories_get(query),
            ("share_button", "GET") => routes::share::handle_button_get(query),

            // Card lifecycle and timer beacons
            ("card_open", "POST") => routes::card::handle_open_post(body),
            ("card_tick", "POST") => routes::card::handle_tick_post(body),
            ("card_teardown", "POST") => routes::card::handle_teardown_post(body),
            ("card_reset", "POST") => routes::card::handle_reset_post(body),

            // Interactions
            ("candle_blow", "POST") => routes::candle::handle_blow_post(body),
            ("question_begin", "POST") => routes::question::handle_begin_post(body),
            ("question_yes", "POST") => routes::question::handle_yes_post(body),
            ("question_no", "POST") => routes::question::handle_no_post(body),
            ("wish_draft", "POST") => routes::wish::handle_draft_post(body),
            ("wish_submit", "POST") => routes::wish::handle_submit_post(body),
            ("wish_edit", "POST") => routes::wish::handle_edit_post(body),

            // Host reports
            ("share_result", "POST") => routes::share::handle_result_post(body),
            ("audio_blocked", "POST") => routes::card::handle_audio_blocked_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-red-500">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-500">405 — method not allowed</span>"#.to_string()
}
