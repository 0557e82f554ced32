//! Whole-page render: the cover until the card has opened, then every
//! section in reading order.

use crate::card::sequencer::Sequencer;
use crate::config::CardConfig;
use crate::views::candle::render_candle_section;
use crate::views::cover::render_cover;
use crate::views::memories::render_memories_section;
use crate::views::question::render_question_section;
use crate::views::sections::{
    render_age, render_footer, render_greeting, render_header, render_hearts, render_nav,
    render_video,
};
use crate::views::share::render_share_button;
use crate::views::wish::render_wish_section;

const LOCK_SCROLL: &str = "<script>document.body.style.overflow = 'hidden';</script>";
const UNLOCK_SCROLL: &str = "<script>document.body.style.overflow = 'auto';</script>";

pub fn render_page(config: &CardConfig, seq: &Sequencer) -> String {
    let mut html = String::with_capacity(32 * 1024);
    html.push_str(&render_hearts());

    if !seq.is_content_visible() {
        html.push_str(&render_cover(config, seq.intro()));
        html.push_str(LOCK_SCROLL);
        return html;
    }

    html.push_str(r#"<main class="relative z-10">"#);
    html.push_str(&render_header(config));
    html.push_str(&render_nav());
    html.push_str(&render_age(config));
    html.push_str(&render_candle_section(config, seq.candle()));
    html.push_str(&render_greeting(config));
    html.push_str(&render_memories_section(config));
    html.push_str(&render_video(config));
    html.push_str(&render_wish_section(config, seq.wish()));
    html.push_str(&render_question_section(config, seq));
    html.push_str(&render_footer(
        config,
        &render_share_button(config, seq.share()),
    ));
    html.push_str("</main>");
    html.push_str(UNLOCK_SCROLL);
    html
}
