//! Memory timeline.
//!
//! Even rows put the photo on the right, odd rows on the left. Each photo
//! gets a small random tilt and the rows fade in one after another.

use rand::Rng;

use crate::config::{CardConfig, Memory};
use crate::views::cosmetic::with_rng;
use crate::views::{escape, section};

/// Delay between consecutive rows fading in.
pub const STAGGER_MS: usize = 350;

pub fn render_memories_section(config: &CardConfig) -> String {
    let mut body = format!(
        r#"<p class="max-w-3xl mx-auto mb-16 text-lg">{}</p>"#,
        escape(&config.memories.intro)
    );
    body.push_str(&render_timeline(&config.memories.items));
    section("photos", &config.memories.title, &body)
}

pub fn render_timeline(items: &[Memory]) -> String {
    let mut html = String::with_capacity(items.len() * 768);
    html.push_str(r#"<div id="timeline" class="max-w-4xl mx-auto space-y-12 md:space-y-20">"#);
    for (index, memory) in items.iter().enumerate() {
        let tilt: i32 = with_rng(|rng| rng.random_range(-3..=2));
        html.push_str(&render_memory(index, memory, tilt));
    }
    html.push_str("</div>");
    html
}

fn render_memory(index: usize, memory: &Memory, tilt: i32) -> String {
    let even = index % 2 == 0;
    let (row, align) = if even {
        (" md:flex-row-reverse", "md:text-right")
    } else {
        ("", "md:text-left")
    };
    let photo = match &memory.image_url {
        Some(url) => format!(
            r#"<img src="{}" alt="Foto Kenangan {}" class="w-full h-64 object-cover border-2 border-white">"#,
            escape(url),
            index + 1
        ),
        None => format!(
            r#"<div class="w-full h-64 bg-pink-100 flex items-center justify-center border-2 border-white"><span class="text-pink-400 font-medium">Foto Kenangan {}</span></div>"#,
            index + 1
        ),
    };
    format!(
        r#"<div class="memory flex flex-col md:flex-row items-center gap-8 animate-fade-in{row}" style="animation-delay: {delay}ms; opacity: 0">
  <div class="md:w-1/2 w-full p-2 bg-white shadow-lg transform transition-transform duration-500 hover:scale-105 hover:shadow-2xl hover:z-10" style="transform: rotate({tilt}deg)">{photo}</div>
  <div class="md:w-1/2 w-full {align} text-center"><p class="text-lg leading-relaxed bg-white/70 backdrop-blur-sm p-6 rounded-lg shadow-md inline-block">{text}</p></div>
</div>"#,
        row = row,
        delay = index * STAGGER_MS,
        tilt = tilt,
        photo = photo,
        align = align,
        text = escape(&memory.description),
    )
}
