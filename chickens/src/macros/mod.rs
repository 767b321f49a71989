//! Chicken Bit Logging Macros
//!
//! Boot-time diagnostics go through a [`Console`](crate::console::Console)
//! wrapping whatever `core::fmt::Write` sink the platform provides (usually
//! the boot UART). Messages carry a level and are dropped when the console
//! is configured for a quieter level. Write failures are ignored: there is
//! nowhere to report them this early.

#![deny(missing_docs)]

/// Debug output levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum DebugLevel {
    /// Error messages - always shown
    Error = 0,
    /// Warning messages
    Warning = 1,
    /// Information messages
    Info = 2,
    /// Debug messages
    Debug = 3,
    /// Trace messages - every register access
    Trace = 4,
}

impl DebugLevel {
    /// Short tag printed in front of each message
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

/// Log a formatted line to a [`Console`](crate::console::Console).
///
/// ```ignore
/// chicken_log!(console, DebugLevel::Debug, "MIDR {:#x}", midr);
/// ```
#[macro_export]
macro_rules! chicken_log {
    ($console:expr, $level:expr, $($arg:tt)*) => {
        $console.log($level, format_args!($($arg)*))
    };
}
