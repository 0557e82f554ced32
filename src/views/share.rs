//! Share button in the footer.

use crate::card::share::{ShareButton, ShareLabel};
use crate::config::CardConfig;
use crate::views::{beacon, escape, js_string};

const SHARE_ICON_PATH: &str = "M18 16.08c-.76 0-1.44.3-1.96.77L8.91 12.7c.05-.23.09-.46.09-.7s-.04-.47-.09-.7l7.05-4.11c.54.5 1.25.81 2.04.81 1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3c0 .24.04.47.09.7L8.04 9.81C7.5 9.31 6.79 9 6 9c-1.66 0-3 1.34-3 3s1.34 3 3 3c.79 0 1.5-.31 2.04-.81l7.12 4.16c-.05.21-.08.43-.08.65 0 1.61 1.31 2.92 2.92 2.92s2.92-1.31 2.92-2.92-1.31-2.92-2.92-2.92z";

/// The button hands title and text to `cardHost.share`, which reports the
/// outcome to `/api/share/result`.
pub fn render_share_button(config: &CardConfig, button: &ShareButton) -> String {
    let label = match button.label() {
        ShareLabel::Idle => &config.share.label,
        ShareLabel::Copied => &config.share.copied_label,
    };
    let onclick = format!(
        "cardHost.share({}, {})",
        js_string(&config.share.title),
        js_string(&config.share.text)
    );
    let mut html = format!(
        r#"<button onclick="{}" class="mt-6 bg-white text-pink-500 border border-pink-500 font-bold py-3 px-8 rounded-full shadow-lg hover:bg-pink-100 transition-all duration-300 transform hover:scale-110 flex items-center justify-center mx-auto"><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="w-5 h-5 mr-2"><path d="{}" /></svg>{}</button>"#,
        escape(&onclick),
        SHARE_ICON_PATH,
        escape(label)
    );
    if let Some(timer) = button.pending() {
        html.push_str(&beacon(timer));
    }
    html
}

/// Clipboard fallback failed: tell the user how to copy by hand.
pub fn render_share_failure(config: &CardConfig) -> String {
    format!(
        "<script>alert({});</script>",
        js_string(&config.share.failure_alert)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::share::ShareOutcome;
    use crate::card::timer::TimerClock;

    #[test]
    fn idle_label() {
        let html = render_share_button(&CardConfig::default(), &ShareButton::default());
        assert!(html.contains("Bagikan Ucapan Ini"));
        assert!(html.contains("cardHost.share("));
        assert!(!html.contains("/api/card/tick"));
    }

    #[test]
    fn copied_label_with_revert_beacon() {
        let mut clock = TimerClock::default();
        let mut button = ShareButton::default();
        button.report(ShareOutcome::Copied, &mut clock);
        let html = render_share_button(&CardConfig::default(), &button);
        assert!(html.contains("Link Disalin!"));
        assert!(html.contains("load delay:2000ms"));
        assert!(html.contains("#share-slot"));
    }

    #[test]
    fn failure_alert() {
        let html = render_share_failure(&CardConfig::default());
        assert!(html.contains("Gagal menyalin link"));
    }
}
