//! Card session state — the reveal tracks, their timers and the sequencer
//! that owns them. State lives in WASM memory (thread_local) for the
//! lifetime of the page and is never persisted.

pub mod candle;
pub mod confirmation;
pub mod intro;
pub mod narrative;
pub mod sequencer;
pub mod share;
pub mod state;
pub mod timer;
pub mod wish;
