//! Confetti shower for the final answer.

use rand::Rng;

use crate::views::cosmetic::with_rng;

pub const CONFETTI_PIECES: usize = 150;

const COLORS: [&str; 8] = [
    "#fce4ec", "#f8bbd0", "#f48fb1", "#f06292", "#ec407a", "#e91e63", "#d81b60", "#c2185b",
];

pub fn render_confetti() -> String {
    let mut html = String::with_capacity(CONFETTI_PIECES * 200);
    html.push_str(r#"<div class="confetti-container">"#);
    with_rng(|rng| {
        for _ in 0..CONFETTI_PIECES {
            let left = rng.random::<f32>() * 100.0;
            let color = COLORS[rng.random_range(0..COLORS.len())];
            let duration = rng.random::<f32>() * 3.0 + 4.0;
            let delay = rng.random::<f32>() * 2.0;
            let rotation = rng.random::<f32>() * 360.0;
            html.push_str(&format!(
                r#"<div class="confetti-piece" style="left: {:.2}%; background-color: {}; animation-duration: {:.2}s; animation-delay: {:.2}s; transform: rotate({:.0}deg)"></div>"#,
                left, color, duration, delay, rotation
            ));
        }
    });
    html.push_str("</div>");
    html
}
