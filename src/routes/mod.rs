//! Route handlers. Each parses its parameters, touches the session and
//! returns the HTML fragment HTMX swaps in.

pub mod candle;
pub mod card;
pub mod question;
pub mod share;
pub mod util;
pub mod wish;

use crate::card::sequencer::Sequencer;
use crate::card::state::with_session;
use crate::config::{CardConfig, with_config};
use crate::views::escape;

/// Render against the active config and the current session.
pub(crate) fn render<F>(f: F) -> String
where
    F: FnOnce(&CardConfig, &Sequencer) -> String,
{
    with_config(|config| with_session(|seq| f(config, seq)))
}

pub(crate) fn error_html(msg: &str) -> String {
    format!(r#"<span class="text-red-500">{}</span>"#, escape(msg))
}
