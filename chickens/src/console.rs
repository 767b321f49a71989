//! Diagnostic Console
//!
//! Level-filtered wrapper around the platform's text sink.

#![deny(missing_docs)]

use core::fmt::{self, Write};

use crate::macros::DebugLevel;

/// Prefix on every leveled line
pub const LOG_PREFIX: &str = "[CHICKENS]";

/// Text sink with a verbosity threshold
#[derive(Debug, Clone)]
pub struct Console<W> {
    writer: W,
    max_level: DebugLevel,
}

impl<W: Write> Console<W> {
    /// Console showing messages up to [`DebugLevel::Info`]
    pub const fn new(writer: W) -> Self {
        Self::with_level(writer, DebugLevel::Info)
    }

    /// Console showing messages up to `max_level`
    pub const fn with_level(writer: W, max_level: DebugLevel) -> Self {
        Self { writer, max_level }
    }

    /// Change the verbosity threshold
    pub fn set_level(&mut self, max_level: DebugLevel) {
        self.max_level = max_level;
    }

    /// Current verbosity threshold
    pub const fn level(&self) -> DebugLevel {
        self.max_level
    }

    /// Whether messages at `level` are shown
    pub fn enabled(&self, level: DebugLevel) -> bool {
        level <= self.max_level
    }

    /// Write `s` verbatim, regardless of level
    pub fn puts(&mut self, s: &str) {
        let _ = self.writer.write_str(s);
    }

    /// Write one tagged line if `level` is enabled
    pub fn log(&mut self, level: DebugLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let _ = write!(self.writer, "{LOG_PREFIX} {}: ", level.tag());
        let _ = self.writer.write_fmt(args);
        let _ = self.writer.write_char('\n');
    }

    /// Underlying sink
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Give back the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }
}
