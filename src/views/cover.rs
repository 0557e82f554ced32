//! Cover overlay shown before the card opens.

use crate::card::intro::{CoverStage, Intro};
use crate::config::CardConfig;
use crate::views::{ROOT_ID, beacon, escape, heart_icon, js_string};

/// Render the cover. While opening it fades out and carries the reveal beacon.
pub fn render_cover(config: &CardConfig, intro: &Intro) -> String {
    let fade = match intro.stage() {
        CoverStage::Closed => "opacity-100",
        _ => "opacity-0 pointer-events-none",
    };
    let mut html = String::with_capacity(1024);
    html.push_str(&format!(
        r#"<div id="cover" class="fixed inset-0 bg-white z-50 flex items-center justify-center text-center transition-opacity duration-1000 {}">"#,
        fade
    ));
    html.push_str(r#"<div class="p-8">"#);
    html.push_str(&format!(
        r#"<h1 class="text-4xl md:text-6xl font-great-vibes text-pink-500 mb-4">{}</h1>"#,
        escape(&config.cover.title)
    ));
    html.push_str(&format!(
        r#"<p class="text-lg md:text-xl text-gray-600 mb-8">{}</p>"#,
        escape(&config.cover.subtitle)
    ));
    html.push_str(&format!(
        r##"<button hx-post="/api/card/open" hx-target="#{root}" hx-swap="innerHTML" class="bg-pink-500 text-white font-bold py-3 px-8 rounded-full shadow-lg hover:bg-pink-600 transition-all duration-300 transform hover:scale-110 flex items-center justify-center mx-auto">{label}{heart}</button>"##,
        root = ROOT_ID,
        label = escape(&config.cover.open_label),
        heart = heart_icon("w-5 h-5 ml-2"),
    ));
    html.push_str(r#"</div></div>"#);

    if let Some(timer) = intro.pending() {
        html.push_str(&beacon(timer));
    }
    html
}

/// Script asking the host to start the ambient track. Failures come back
/// through `/api/audio/blocked`.
pub fn render_audio_start(config: &CardConfig) -> String {
    format!(
        "<script>cardHost.playAudio({}, {});</script>",
        js_string(&config.audio.src),
        config.audio.volume
    )
}
