//! Browser console logging for `tracing`.
//!
//! Formatted events are buffered per event and handed to the matching
//! `console.*` method when the writer is dropped.

use crate::config::WebConfig;
use crate::error::StartError;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Console method an event is reported through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.info`
    Info,
    /// `console.debug`
    Debug,
}

impl ConsoleMethod {
    /// Picks the console method for a tracing level.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Debug,
        }
    }

    fn emit(self, message: &JsValue) {
        match self {
            ConsoleMethod::Error => web_sys::console::error_1(message),
            ConsoleMethod::Warn => web_sys::console::warn_1(message),
            ConsoleMethod::Info => web_sys::console::info_1(message),
            ConsoleMethod::Debug => web_sys::console::debug_1(message),
        }
    }
}

/// Writer producing one console entry per formatted event.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            method: ConsoleMethod::for_level(level),
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        self.method.emit(&JsValue::from_str(line.trim_end()));
    }
}

/// `MakeWriter` routing events to the browser console by level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Installs the global subscriber using the configured filter.
///
/// Timestamps are disabled: `std::time` is unavailable on wasm32.
pub fn init(config: &WebConfig) -> Result<(), StartError> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|e| StartError::Logging(format!("invalid filter '{}': {}", config.log_filter(), e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .try_init()
        .map_err(|e| StartError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_route_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_empty_writer_drops_silently() {
        // Nothing buffered, so no console call is attempted off-wasm.
        drop(ConsoleWriter::new(Level::INFO));
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = WebConfig::from_toml_str("log_filter = \"strictly_web=verbose\"").unwrap();
        assert!(matches!(init(&config), Err(StartError::Logging(_))));
    }
}
