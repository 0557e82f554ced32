//! HTML fragment builders for every section of the card.
//!
//! Stateful sections render into a fixed container id so a route can return
//! just that container's new contents for HTMX to swap.

pub mod candle;
pub mod confetti;
pub mod cosmetic;
pub mod cover;
pub mod memories;
pub mod page;
pub mod question;
pub mod sections;
pub mod share;
pub mod wish;

use crate::card::timer::{PendingTimer, Track};

// ── Swap targets ───────────────────────────────────────────────────

pub const ROOT_ID: &str = "card-root";
pub const CANDLE_ID: &str = "candle-stage";
pub const QUESTION_ID: &str = "question-stage";
pub const WISH_ID: &str = "wish-stage";
pub const SHARE_ID: &str = "share-slot";

/// Container a track's section renders into.
pub fn target_for(track: Track) -> &'static str {
    match track {
        Track::Intro => ROOT_ID,
        Track::Narrative | Track::Confirmation => QUESTION_ID,
        Track::Wish => WISH_ID,
        Track::Share => SHARE_ID,
    }
}

// ── Shared pieces ──────────────────────────────────────────────────

const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

pub fn heart_icon(class: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="{}"><path d="{}" /></svg>"#,
        class, HEART_PATH
    )
}

/// A titled page section with an anchor id.
pub fn section(id: &str, title: &str, body: &str) -> String {
    format!(
        r#"<section id="{id}" class="py-16 md:py-24 px-4 relative overflow-hidden">
  <div class="container mx-auto text-center">
    <h2 class="text-4xl md:text-6xl font-great-vibes text-pink-500 mb-8">{title}</h2>
    {body}
  </div>
</section>"#,
        id = id,
        title = escape(title),
        body = body
    )
}

/// Hidden element that posts the timer id back once its delay has passed.
///
/// The delay is always the full scheduled delay: the module has no wall
/// clock, so a container rendered again while its timer is pending (a page
/// GET, a late tick for the same container) restarts that countdown and the
/// step is held longer. The id is unchanged, so the step still advances
/// exactly once.
pub fn beacon(timer: &PendingTimer) -> String {
    format!(
        r##"<div hidden hx-post="/api/card/tick" hx-vals='{{"timer":"{id}","track":"{track}"}}' hx-trigger="load delay:{delay}ms" hx-target="#{target}" hx-swap="innerHTML"></div>"##,
        id = timer.id,
        track = timer.track.as_str(),
        delay = timer.delay_ms,
        target = target_for(timer.track),
    )
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Quote a string as a JavaScript string literal for inline scripts.
pub fn js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
