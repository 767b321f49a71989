//! In-Memory Register Backend
//!
//! A register file that starts out all-zero (or preloaded), plus a trace of
//! every operation in the form it was issued. Tests compare the trace
//! against the expected literal sequence and the register file against the
//! expected end state. [`MockCore`] stands in for the core identity.
//!
//! Storage is `heapless`, so the mock also works in `no_std` boot tests
//! behind the `mock` feature.

#![deny(missing_docs)]

use heapless::{FnvIndexMap, Vec};
use static_assertions::const_assert;

use super::{CoreIdentity, SystemRegisters};
use crate::regs::SysReg;

/// Register file capacity
pub const MAX_REGISTERS: usize = 128;

/// Trace capacity
pub const MAX_TRACE: usize = 64;

const_assert!(SysReg::ALL.len() <= MAX_REGISTERS);

/// One operation as issued through [`SystemRegisters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegOp {
    /// `read`
    Read(SysReg),
    /// raw `write`
    Write(SysReg, u64),
    /// `set_bits`
    Set(SysReg, u64),
    /// `clear_bits`
    Clear(SysReg, u64),
    /// `mask_bits` with (clear, set)
    Mask(SysReg, u64, u64),
}

impl RegOp {
    /// Register the operation targets
    pub const fn reg(&self) -> SysReg {
        match *self {
            Self::Read(reg)
            | Self::Write(reg, _)
            | Self::Set(reg, _)
            | Self::Clear(reg, _)
            | Self::Mask(reg, _, _) => reg,
        }
    }

    /// True for operations that change the register
    pub const fn is_write(&self) -> bool {
        !matches!(self, Self::Read(_))
    }
}

/// Register file and operation trace
#[derive(Debug, Clone)]
pub struct MockRegisters {
    values: FnvIndexMap<SysReg, u64, MAX_REGISTERS>,
    trace: Vec<RegOp, MAX_TRACE>,
    trace_overflowed: bool,
}

impl Default for MockRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRegisters {
    /// All-zero register file
    pub fn new() -> Self {
        Self {
            values: FnvIndexMap::new(),
            trace: Vec::new(),
            trace_overflowed: false,
        }
    }

    /// Preload a register without recording a trace entry
    #[must_use]
    pub fn with_value(mut self, reg: SysReg, value: u64) -> Self {
        self.store(reg, value);
        self
    }

    /// Current register value without recording a trace entry
    pub fn peek(&self, reg: SysReg) -> u64 {
        self.values.get(&reg).copied().unwrap_or(0)
    }

    /// Registers that hold a value, with that value
    pub fn values(&self) -> impl Iterator<Item = (SysReg, u64)> + '_ {
        self.values.iter().map(|(&reg, &value)| (reg, value))
    }

    /// Operations issued so far
    pub fn trace(&self) -> &[RegOp] {
        &self.trace
    }

    /// True if operations were dropped because the trace was full
    pub const fn trace_overflowed(&self) -> bool {
        self.trace_overflowed
    }

    /// Forget the recorded operations, keep register contents
    pub fn clear_trace(&mut self) {
        self.trace.clear();
        self.trace_overflowed = false;
    }

    fn store(&mut self, reg: SysReg, value: u64) {
        // Capacity covers every SysReg, checked at compile time
        let _ = self.values.insert(reg, value);
    }

    fn record(&mut self, op: RegOp) {
        if self.trace.push(op).is_err() {
            self.trace_overflowed = true;
        }
    }
}

impl SystemRegisters for MockRegisters {
    fn read(&mut self, reg: SysReg) -> u64 {
        self.record(RegOp::Read(reg));
        self.peek(reg)
    }

    fn write(&mut self, reg: SysReg, value: u64) {
        self.record(RegOp::Write(reg, value));
        self.store(reg, value);
    }

    fn set_bits(&mut self, reg: SysReg, set: u64) {
        self.record(RegOp::Set(reg, set));
        self.store(reg, self.peek(reg) | set);
    }

    fn clear_bits(&mut self, reg: SysReg, clear: u64) {
        self.record(RegOp::Clear(reg, clear));
        self.store(reg, self.peek(reg) & !clear);
    }

    fn mask_bits(&mut self, reg: SysReg, clear: u64, set: u64) {
        self.record(RegOp::Mask(reg, clear, set));
        self.store(reg, (self.peek(reg) & !clear) | set);
    }
}

/// Fixed core identity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockCore {
    /// Reported by [`CoreIdentity::is_ecore`]
    pub ecore: bool,
    /// Reported by [`CoreIdentity::midr`]
    pub midr: u64,
}

impl MockCore {
    /// P-core with the given MIDR
    pub const fn pcore(midr: u64) -> Self {
        Self { ecore: false, midr }
    }

    /// E-core with the given MIDR
    pub const fn ecore(midr: u64) -> Self {
        Self { ecore: true, midr }
    }
}

impl CoreIdentity for MockCore {
    fn is_ecore(&self) -> bool {
        self.ecore
    }

    fn midr(&self) -> u64 {
        self.midr
    }
}
