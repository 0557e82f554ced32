//! Static sections of the open card: background hearts, header, navigation,
//! age banner, greeting letter, video placeholder and footer.

use crate::config::CardConfig;
use crate::views::{SHARE_ID, escape, heart_icon, section};

/// Anchor id and label for each navigation link.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("greeting", "Ucapanku"),
    ("photos", "Kenangan"),
    ("video", "Video"),
    ("wishes", "Harapanmu"),
    ("question", "Pertanyaan"),
];

const FLOATING_HEARTS: usize = 10;

pub fn render_hearts() -> String {
    let mut html = String::from(r#"<div class="hearts">"#);
    for _ in 0..FLOATING_HEARTS {
        html.push_str(r#"<div class="heart"></div>"#);
    }
    html.push_str("</div>");
    html
}

pub fn render_header(config: &CardConfig) -> String {
    format!(
        r#"<header class="min-h-screen flex items-center justify-center text-center bg-cover bg-center bg-fixed" style="background-image: url('{bg}')">
  <div class="bg-black bg-opacity-40 p-8 rounded-xl backdrop-blur-sm">
    <h1 class="text-5xl md:text-8xl font-great-vibes text-white">{headline}</h1>
    <p class="text-xl md:text-2xl text-pink-200 mt-4">{dedication}</p>
  </div>
</header>"#,
        bg = escape(&config.header.background_url),
        headline = escape(&config.header.headline),
        dedication = escape(&config.header.dedication),
    )
}

pub fn render_nav() -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<nav class="sticky top-0 bg-white/80 backdrop-blur-md shadow-md z-40 py-2 animate-fade-in">"#);
    html.push_str(r#"<div class="container mx-auto flex justify-center items-center flex-wrap gap-x-4 md:gap-x-8 gap-y-2 px-4">"#);
    for (anchor, label) in NAV_LINKS {
        html.push_str(&format!(
            r##"<a href="#{}" class="text-pink-500 hover:text-pink-700 font-semibold transition-colors duration-300 px-3 py-2 rounded-md text-sm md:text-base">{}</a>"##,
            anchor, label
        ));
    }
    html.push_str("</div></nav>");
    html
}

/// Age banner: the digits of the age with a heart in the middle.
pub fn render_age(config: &CardConfig) -> String {
    let digits: Vec<char> = config.age.years.to_string().chars().collect();
    let mut banner = String::from(
        r#"<div class="flex justify-center items-center text-pink-400" style="text-shadow: 2px 2px 10px rgba(236, 72, 153, 0.3)">"#,
    );
    let middle = digits.len().div_ceil(2);
    for (i, d) in digits.iter().enumerate() {
        if i == middle {
            banner.push_str(&format!(
                r#"<div class="mx-4">{}</div>"#,
                heart_icon("w-16 h-16 md:w-24 md:h-24 text-pink-300")
            ));
        }
        banner.push_str(&format!(
            r#"<span class="text-9xl md:text-[12rem] font-bold">{}</span>"#,
            d
        ));
    }
    banner.push_str("</div>");
    banner.push_str(&format!(
        r#"<p class="max-w-3xl mx-auto mt-8 text-lg">{}</p>"#,
        escape(&config.age.blurb)
    ));
    section("twenty", &config.age.title, &banner)
}

pub fn render_greeting(config: &CardConfig) -> String {
    let g = &config.greeting;
    let mut body = String::from(
        r#"<div class="max-w-3xl mx-auto bg-white/70 backdrop-blur-sm p-8 md:p-12 rounded-lg shadow-lg text-left text-lg leading-relaxed">"#,
    );
    body.push_str(&format!(r#"<p class="mb-4">{}</p>"#, escape(&g.salutation)));
    for paragraph in &g.paragraphs {
        body.push_str(&format!(r#"<p class="mb-4">{}</p>"#, escape(paragraph)));
    }
    body.push_str(&format!(
        r#"<p class="mt-6 font-great-vibes text-3xl text-right text-pink-500">{}</p>"#,
        escape(&g.signature)
    ));
    body.push_str("</div>");
    section("greeting", &g.title, &body)
}

pub fn render_video(config: &CardConfig) -> String {
    let v = &config.video;
    let body = format!(
        r#"<p class="max-w-3xl mx-auto mb-12 text-lg">{intro}</p>
<div class="aspect-video max-w-4xl mx-auto bg-pink-200 border-8 border-white shadow-xl rounded-lg flex items-center justify-center">
  <div class="text-center text-pink-500">
    <svg xmlns="http://www.w3.org/2000/svg" class="h-20 w-20 mx-auto" viewBox="0 0 20 20" fill="currentColor"><path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zM9.555 7.168A1 1 0 008 8v4a1 1 0 001.555.832l3-2a1 1 0 000-1.664l-3-2z" clip-rule="evenodd" /></svg>
    <p class="mt-4 font-semibold text-xl">{placeholder}</p>
  </div>
</div>"#,
        intro = escape(&v.intro),
        placeholder = escape(&v.placeholder),
    );
    section("video", &v.title, &body)
}

/// Footer; `share_button` is the current share button markup.
pub fn render_footer(config: &CardConfig, share_button: &str) -> String {
    format!(
        r#"<footer class="text-center py-12 text-gray-500">
  <p class="text-2xl font-great-vibes text-pink-500">{sign_off}</p>
  <p>{credit}</p>
  <div id="{share_id}">{share}</div>
</footer>"#,
        sign_off = escape(&config.footer.sign_off),
        credit = escape(&config.footer.credit),
        share_id = SHARE_ID,
        share = share_button,
    )
}
