//! Wish section: textarea, submit button, envelope animation, thank-you.

use crate::card::wish::{Wish, WishStage};
use crate::config::CardConfig;
use crate::views::{WISH_ID, beacon, escape, section};

pub const SUBMIT_ID: &str = "wish-submit";
pub const TEXT_ID: &str = "wish-text";

pub fn render_wish_section(config: &CardConfig, wish: &Wish) -> String {
    let body = format!(
        r#"<div class="max-w-3xl mx-auto bg-white/70 backdrop-blur-sm p-8 md:p-12 rounded-lg shadow-lg text-center text-lg leading-relaxed">
  <p class="mb-6">{prompt}</p>
  <div id="{id}">{stage}</div>
</div>"#,
        prompt = escape(&config.wish.prompt),
        id = WISH_ID,
        stage = render_wish_stage(config, wish),
    );
    section("wishes", &config.wish.title, &body)
}

/// Contents of the wish swap container for the current stage.
pub fn render_wish_stage(config: &CardConfig, wish: &Wish) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(&render_textarea(config, wish));

    match wish.stage() {
        WishStage::Empty | WishStage::Drafted(_) => {
            html.push_str(&render_submit_button(config, wish));
        }
        WishStage::Sending(_) => {
            html.push_str(&format!(
                r#"<div class="envelope mt-6 mx-auto animate-envelope-send" aria-hidden="true"><div class="envelope-flap"></div><div class="envelope-letter"></div></div>
<p class="mt-4 text-pink-500 italic">{}</p>"#,
                escape(&config.wish.sending_label)
            ));
            html.push_str(&render_edit_button(config));
        }
        WishStage::Submitted(_) => {
            html.push_str(&format!(
                r#"<p class="mt-6 text-pink-600 font-semibold animate-fade-in">{}</p>"#,
                escape(&config.wish.thanks)
            ));
            html.push_str(&render_edit_button(config));
        }
    }

    if let Some(timer) = wish.pending() {
        html.push_str(&beacon(timer));
    }
    html
}

fn render_textarea(config: &CardConfig, wish: &Wish) -> String {
    let readonly = if wish.is_frozen() { " readonly" } else { "" };
    format!(
        r##"<textarea id="{text_id}" name="text" hx-post="/api/wish/draft" hx-trigger="input changed delay:150ms" hx-target="#{submit_id}" hx-swap="outerHTML" class="w-full h-40 p-4 border-2 border-pink-200 rounded-lg focus:ring-pink-400 focus:border-pink-400 transition duration-300 text-gray-700 text-base" placeholder="{placeholder}" aria-label="Tulis harapanmu di sini"{readonly}>{text}</textarea>"##,
        text_id = TEXT_ID,
        submit_id = SUBMIT_ID,
        placeholder = escape(&config.wish.placeholder),
        readonly = readonly,
        text = escape(wish.text()),
    )
}

/// Submit button; disabled while the draft is blank.
pub fn render_submit_button(config: &CardConfig, wish: &Wish) -> String {
    let disabled = if wish.can_submit() {
        ""
    } else {
        " disabled"
    };
    format!(
        r##"<button id="{submit_id}" hx-post="/api/wish/submit" hx-include="#{text_id}" hx-target="#{wish_id}" hx-swap="innerHTML" class="mt-6 bg-pink-500 text-white font-bold py-3 px-8 rounded-full shadow-lg hover:bg-pink-600 disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-300"{disabled}>{label}</button>"##,
        submit_id = SUBMIT_ID,
        text_id = TEXT_ID,
        wish_id = WISH_ID,
        disabled = disabled,
        label = escape(&config.wish.submit_label),
    )
}

fn render_edit_button(config: &CardConfig) -> String {
    format!(
        r##"<button hx-post="/api/wish/edit" hx-target="#{}" hx-swap="innerHTML" class="mt-4 text-pink-500 underline hover:text-pink-700 text-sm">{}</button>"##,
        WISH_ID,
        escape(&config.wish.edit_label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::timer::TimerClock;

    #[test]
    fn empty_wish_disables_submit() {
        let html = render_wish_stage(&CardConfig::default(), &Wish::default());
        assert!(html.contains(" disabled>"));
        assert!(html.contains("Kirim Harapan"));
    }

    #[test]
    fn drafted_wish_enables_submit_and_keeps_text() {
        let mut wish = Wish::default();
        wish.draft("kita <selalu> bersama");
        let html = render_wish_stage(&CardConfig::default(), &wish);
        assert!(!html.contains(" disabled>"));
        assert!(html.contains("kita &lt;selalu&gt; bersama"));
    }

    #[test]
    fn sending_shows_envelope_and_beacon() {
        let mut clock = TimerClock::default();
        let mut wish = Wish::default();
        wish.submit("I hope...", &mut clock);
        let html = render_wish_stage(&CardConfig::default(), &wish);
        assert!(html.contains("animate-envelope-send"));
        assert!(html.contains("load delay:2800ms"));
        assert!(html.contains("/api/wish/edit"));
        assert!(html.contains(" readonly>"));
        assert!(!html.contains("/api/wish/submit"));
    }

    #[test]
    fn submitted_shows_thanks_without_beacon() {
        let mut clock = TimerClock::default();
        let mut wish = Wish::default();
        wish.submit("I hope...", &mut clock);
        let id = wish.pending().unwrap().id;
        wish.fire(id);
        let html = render_wish_stage(&CardConfig::default(), &wish);
        assert!(html.contains("Terima kasih sudah menuliskan harapanmu"));
        assert!(!html.contains("/api/card/tick"));
        assert!(html.contains("Ubah Harapan"));
    }
}
