//! `tracing` output for the browser console.
//!
//! A `fmt` subscriber writes each event into a [`ConsoleWriter`], which hands
//! the finished line to the console method matching the event level
//! (`console.error`, `console.warn`, ...). Off wasm the line goes to stderr.

use std::{fmt, io};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Logging setup errors.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    #[error("Failed to initialize logging: {0}")]
    Initialization(String),
}

/// Receives one formatted log line.
pub type Sink = fn(Level, &str);

/// Makes a [`ConsoleWriter`] per event.
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl fmt::Debug for ConsoleMakeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleMakeWriter").finish_non_exhaustive()
    }
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleMakeWriter {
    /// Writer targeting the platform console.
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: console_sink }
    }

    /// Writer targeting a custom sink.
    #[must_use]
    pub const fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }

    fn writer(&self, level: Level) -> ConsoleWriter {
        ConsoleWriter {
            level,
            sink: self.sink,
            buf: Vec::with_capacity(128),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

/// Buffers one event and emits it when dropped.
pub struct ConsoleWriter {
    level: Level,
    sink: Sink,
    buf: Vec<u8>,
}

impl fmt::Debug for ConsoleWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleWriter")
            .field("level", &self.level)
            .field("buffered", &self.buf.len())
            .finish_non_exhaustive()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        (self.sink)(self.level, line.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn console_sink(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let msg = JsValue::from_str(line);
    if level == Level::ERROR {
        console::error_1(&msg);
    } else if level == Level::WARN {
        console::warn_1(&msg);
    } else if level == Level::INFO {
        console::info_1(&msg);
    } else {
        console::debug_1(&msg);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_sink(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global subscriber, keeping events at or above `level`.
pub fn init_logging(level: Level) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new())
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| LoggingError::Initialization(e.to_string()))
}
