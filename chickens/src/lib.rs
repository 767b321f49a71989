//! Apple CPU Chicken Bits
//!
//! Early per-core configuration of Apple implementation-defined registers.
//! Chicken bits disable or adjust microarchitectural features to work around
//! errata; they are set once on every core before it does anything else.
//!
//! # Layout
//!
//! - [`regs`]: register encodings and field definitions
//! - [`arch`]: register access traits and backends
//! - [`cpu`]: MIDR dispatch and the per-microarchitecture routines
//! - [`console`] / [`macros`]: boot diagnostics
//!
//! # Usage
//!
//! ```ignore
//! let mut console = Console::new(uart);
//! // SAFETY: running at EL2 on the core being brought up
//! let part = unsafe { chickens::cpu::init_cpu_chickens_hw(&mut console) }?;
//! ```
//!
//! # Safety
//!
//! Unsafe code is limited to the `mrs`/`msr` dispatch in [`regs`], the
//! hardware backend in `arch::aarch64` and the hardware entry point in
//! [`cpu`]. Everything else is plain Rust against [`arch::SystemRegisters`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::panic)]
#![warn(clippy::unwrap_used)]

pub mod arch;
pub mod console;
pub mod cpu;
pub mod macros;
pub mod regs;

pub use arch::{CoreIdentity, SystemRegisters};
pub use console::Console;
pub use cpu::{init_cpu_chickens, CorePart, Midr};
pub use macros::DebugLevel;
pub use regs::{BitField, SysReg};

/// Chicken bit setup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
pub enum ChickenError {
    /// MIDR_EL1 names a vendor other than Apple
    #[error("unknown CPU implementer {0:#04x}")]
    UnknownImplementer(u8),
    /// Apple core without a chicken bit routine
    #[error("no chicken bits for part {part:#x} revision {revision:#x}")]
    UnsupportedPart {
        /// MIDR_EL1 part number
        part: u16,
        /// Combined variant/revision
        revision: u32,
    },
}

/// Result type for chicken bit operations
pub type ChickenResult<T> = Result<T, ChickenError>;
