//! Log output destinations.

use std::sync::{Arc, Mutex};

use crate::LogLevel;

/// Receives rendered log lines.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, level: LogLevel, line: &str);
}

/// Browser console on wasm32, stderr elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: LogLevel, line: &str) {
        use web_sys::console;

        let line = line.into();
        match level {
            LogLevel::Error => console::error_1(&line),
            LogLevel::Warn => console::warn_1(&line),
            LogLevel::Info => console::info_1(&line),
            LogLevel::Debug | LogLevel::Trace => console::debug_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, _level: LogLevel, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line.to_string());
    }
}
