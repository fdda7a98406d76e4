//! Console Logger
//!
//! A `tracing-subscriber` fmt writer for the browser. Each formatted event is
//! buffered and handed to the `console` method matching its level, so the
//! devtools level filter works. Off wasm32 the lines go to stderr.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// `console.*` function an event is sent to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            Level::DEBUG => ConsoleMethod::Log,
            Level::TRACE => ConsoleMethod::Debug,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Collects one formatted event; emits it on flush or drop
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    pub fn method(&self) -> ConsoleMethod {
        self.method
    }

    /// Buffered text without the trailing newline; empties the buffer
    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer)
            .trim_end_matches(&['\r', '\n'][..])
            .to_string();
        self.buffer.clear();
        Some(line)
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(self.method, &line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init(max_level: Level) -> bool {
    // No timestamps: the browser console adds its own, and wasm32 has no system clock
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init()
        .is_ok()
}
