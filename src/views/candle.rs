//! Candle section: cake, flame or smoke, and the blow button.

use rand::Rng;

use crate::card::candle::Candle;
use crate::config::CardConfig;
use crate::views::cosmetic::with_rng;
use crate::views::{CANDLE_ID, escape, section};

const SMOKE_PUFFS: usize = 5;

/// Whole section including the swap container.
pub fn render_candle_section(config: &CardConfig, candle: &Candle) -> String {
    let body = format!(
        r#"<div id="{}" class="max-w-md mx-auto bg-white/70 backdrop-blur-sm p-8 rounded-lg shadow-lg">{}</div>"#,
        CANDLE_ID,
        render_candle_stage(config, candle)
    );
    section("candle", &config.candle.title, &body)
}

/// Contents of the swap container.
pub fn render_candle_stage(config: &CardConfig, candle: &Candle) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="relative w-64 h-80 mx-auto mb-4">"#);
    html.push_str(r#"<div class="absolute top-10 left-1/2 -translate-x-1/2 z-20">"#);
    if candle.is_blown() {
        html.push_str(&render_smoke());
    } else {
        html.push_str(r#"<div class="absolute top-7 left-1/2 -translate-x-1/2 w-1 h-2 bg-gray-700 z-10"></div>"#);
        html.push_str(r#"<div class="absolute -top-1 left-1/2 -translate-x-1/2 w-5 h-10"><div class="flame-outer"></div><div class="flame-inner"></div><div class="flame-base"></div></div>"#);
    }
    html.push_str(r#"<div class="absolute top-8 left-1/2 w-3 h-10 bg-white border-2 border-pink-200 rounded-full" style="transform: translateX(-50%)"></div>"#);
    html.push_str("</div>");
    html.push_str(CAKE);
    html.push_str("</div>");

    if candle.is_blown() {
        html.push_str(&format!(
            r#"<p class="mt-8 text-2xl font-bold text-pink-600 animate-fade-in">{}</p>"#,
            escape(&config.candle.blown_message)
        ));
    } else {
        html.push_str(&format!(
            r#"<p class="mt-6 mb-6 text-lg">{}</p>"#,
            escape(&config.candle.prompt)
        ));
        html.push_str(&format!(
            r##"<button hx-post="/api/candle/blow" hx-target="#{}" hx-swap="innerHTML" class="bg-pink-500 text-white font-bold py-3 px-8 rounded-full shadow-lg hover:bg-pink-600 transition-all duration-300 transform hover:scale-110">{}</button>"##,
            CANDLE_ID,
            escape(&config.candle.button)
        ));
    }
    html
}

fn render_smoke() -> String {
    let mut html = String::from(r#"<div class="absolute -top-4 left-1/2 -translate-x-1/2">"#);
    for i in 0..SMOKE_PUFFS {
        let offset: f32 = with_rng(|rng| (rng.random::<f32>() - 0.5) * 30.0);
        html.push_str(&format!(
            r#"<div class="absolute bottom-0 w-8 h-8 bg-gray-400/40 rounded-full animate-puff-out" style="transform-origin: bottom center; animation-delay: {:.2}s; left: {:.1}px"></div>"#,
            i as f32 * 0.15,
            offset
        ));
    }
    html.push_str("</div>");
    html
}

const CAKE: &str = r#"<div class="absolute bottom-0 w-full h-56">
<div class="absolute top-0 w-full h-16 bg-pink-200 rounded-t-xl z-10"></div>
<div class="absolute top-12 w-full h-8 bg-pink-300 z-10" style="border-radius: 50% / 20%"></div>
<div class="absolute top-14 w-full h-4 bg-pink-300 z-10"></div>
<div class="absolute top-16 w-full h-24 bg-pink-100"></div>
<div class="absolute top-[12.5rem] w-full h-8 bg-pink-300 z-10" style="border-radius: 50% / 20%"></div>
<div class="absolute top-[12.7rem] w-full h-4 bg-pink-300 z-10"></div>
<div class="absolute bottom-0 w-full h-4 bg-white rounded-lg shadow-2xl"></div>
<div class="absolute -bottom-2 left-[-5%] w-[110%] h-4 bg-white rounded-lg shadow-2xl"></div>
</div>"#;
