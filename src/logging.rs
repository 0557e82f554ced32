//! `tracing` output for the browser.
//!
//! Formatted events are handed line by line to `console.log` when running as
//! WASM, and to stderr anywhere else (native test runs).

use std::io;

use crate::config::LogLevel;

#[cfg(target_arch = "wasm32")]
mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        pub fn log(s: &str);
    }
}

fn emit(line: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log(line);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

/// Buffers one formatted event and emits it when dropped.
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let text = String::from_utf8_lossy(&self.buf);
            emit(text.trim_end());
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// Install the global subscriber. Returns `false` if one was already set,
/// which happens when the host calls `init` more than once.
pub fn init(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(level.as_tracing())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn writer_buffers_until_flush() {
        let mut w = ConsoleWriter::default();
        w.write_all(b"hello ").unwrap();
        w.write_all(b"world\n").unwrap();
        assert_eq!(w.buf, b"hello world\n");
        w.flush().unwrap();
        assert!(w.buf.is_empty());
    }

    #[test]
    fn init_twice_reports_existing_subscriber() {
        init(LogLevel::Warn);
        assert!(!init(LogLevel::Debug));
    }
}
