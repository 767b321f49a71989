//! Register Access Layer
//!
//! Chicken-bit code never touches hardware directly. It goes through two
//! small traits so the same sequence can run against the real core or an
//! in-memory register file:
//!
//! - [`SystemRegisters`]: read/write of implementation-defined registers,
//!   with the three read-modify-write helpers built on top
//! - [`CoreIdentity`]: what kind of core is executing
//!
//! # Backends
//!
//! - [`aarch64::Cpu`] / [`aarch64::CoreId`]: the executing core (AArch64 only)
//! - [`mock::MockRegisters`] / [`mock::MockCore`]: register file with an
//!   operation trace and a fixed identity (tests and the `mock` feature)
//! - [`TracingRegisters`]: wraps another backend and logs every access
//!
//! # Concurrency
//!
//! HID registers are banked per core. Each core runs its own bring-up on
//! its own backend value; nothing here is shared or needs locking.

#![deny(missing_docs)]

use core::fmt::Write;

use crate::chicken_log;
use crate::console::Console;
use crate::macros::DebugLevel;
use crate::regs::SysReg;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// Access to implementation-defined system registers of one core.
///
/// Writes to this space have no software-visible failure mode, so nothing
/// here returns a `Result`.
pub trait SystemRegisters {
    /// Read a register
    fn read(&mut self, reg: SysReg) -> u64;

    /// Write a register unconditionally
    fn write(&mut self, reg: SysReg, value: u64);

    /// `reg |= set`
    fn set_bits(&mut self, reg: SysReg, set: u64) {
        let value = self.read(reg) | set;
        self.write(reg, value);
    }

    /// `reg &= !clear`
    fn clear_bits(&mut self, reg: SysReg, clear: u64) {
        let value = self.read(reg) & !clear;
        self.write(reg, value);
    }

    /// `reg = (reg & !clear) | set`
    ///
    /// `set` is already shifted into field position and is not masked.
    fn mask_bits(&mut self, reg: SysReg, clear: u64, set: u64) {
        let value = (self.read(reg) & !clear) | set;
        self.write(reg, value);
    }
}

impl<T: SystemRegisters + ?Sized> SystemRegisters for &mut T {
    fn read(&mut self, reg: SysReg) -> u64 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: SysReg, value: u64) {
        (**self).write(reg, value);
    }

    fn set_bits(&mut self, reg: SysReg, set: u64) {
        (**self).set_bits(reg, set);
    }

    fn clear_bits(&mut self, reg: SysReg, clear: u64) {
        (**self).clear_bits(reg, clear);
    }

    fn mask_bits(&mut self, reg: SysReg, clear: u64, set: u64) {
        (**self).mask_bits(reg, clear, set);
    }
}

/// Identity of the executing core
pub trait CoreIdentity {
    /// True on an efficiency core
    fn is_ecore(&self) -> bool;

    /// Raw MIDR_EL1
    fn midr(&self) -> u64;
}

/// MPIDR_EL1 bit that is clear on efficiency cores
pub const MPIDR_PCORE_BIT: u64 = 1 << 16;

/// E-core predicate from an MPIDR_EL1 value
pub const fn mpidr_is_ecore(mpidr: u64) -> bool {
    mpidr & MPIDR_PCORE_BIT == 0
}

/// Backend wrapper that logs every register operation at
/// [`DebugLevel::Trace`]
pub struct TracingRegisters<R, W> {
    inner: R,
    console: Console<W>,
}

impl<R: SystemRegisters, W: Write> TracingRegisters<R, W> {
    /// Wrap `inner`, logging to `console`
    pub const fn new(inner: R, console: Console<W>) -> Self {
        Self { inner, console }
    }

    /// Unwrap into the backend and the console
    pub fn into_parts(self) -> (R, Console<W>) {
        (self.inner, self.console)
    }
}

impl<R: SystemRegisters, W: Write> SystemRegisters for TracingRegisters<R, W> {
    fn read(&mut self, reg: SysReg) -> u64 {
        let value = self.inner.read(reg);
        chicken_log!(self.console, DebugLevel::Trace, "mrs {reg:?} ({reg}) = {value:#018x}");
        value
    }

    fn write(&mut self, reg: SysReg, value: u64) {
        chicken_log!(self.console, DebugLevel::Trace, "msr {reg:?} ({reg}) = {value:#018x}");
        self.inner.write(reg, value);
    }

    fn set_bits(&mut self, reg: SysReg, set: u64) {
        chicken_log!(self.console, DebugLevel::Trace, "set {reg:?} |= {set:#018x}");
        self.inner.set_bits(reg, set);
    }

    fn clear_bits(&mut self, reg: SysReg, clear: u64) {
        chicken_log!(self.console, DebugLevel::Trace, "clr {reg:?} &= !{clear:#018x}");
        self.inner.clear_bits(reg, clear);
    }

    fn mask_bits(&mut self, reg: SysReg, clear: u64, set: u64) {
        chicken_log!(
            self.console,
            DebugLevel::Trace,
            "mask {reg:?} &= !{clear:#018x} |= {set:#018x}"
        );
        self.inner.mask_bits(reg, clear, set);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{FnvIndexMap, String};

    /// Bare backend that only implements the required methods, so the
    /// provided read-modify-write helpers are what gets exercised
    #[derive(Default)]
    struct Plain {
        regs: FnvIndexMap<SysReg, u64, 8>,
    }

    impl SystemRegisters for Plain {
        fn read(&mut self, reg: SysReg) -> u64 {
            self.regs.get(&reg).copied().unwrap_or(0)
        }

        fn write(&mut self, reg: SysReg, value: u64) {
            self.regs.insert(reg, value).unwrap();
        }
    }

    #[test]
    fn test_provided_helpers() {
        let mut regs = Plain::default();
        regs.write(SysReg::Hid3, 0xF0);

        regs.set_bits(SysReg::Hid3, 0x1);
        assert_eq!(regs.read(SysReg::Hid3), 0xF1);

        regs.clear_bits(SysReg::Hid3, 0x30);
        assert_eq!(regs.read(SysReg::Hid3), 0xC1);

        regs.mask_bits(SysReg::Hid3, 0xFF, 0x0A);
        assert_eq!(regs.read(SysReg::Hid3), 0x0A);
    }

    #[test]
    fn test_mask_bits_does_not_truncate_set() {
        let mut regs = Plain::default();
        regs.mask_bits(SysReg::Hid5, 0x0F, 0x1F0);
        assert_eq!(regs.read(SysReg::Hid5), 0x1F0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn poke<R: SystemRegisters>(mut regs: R) {
            regs.set_bits(SysReg::Hid12, 1 << 46);
        }

        let mut regs = Plain::default();
        poke(&mut regs);
        assert_eq!(regs.read(SysReg::Hid12), 1 << 46);
    }

    #[test]
    fn test_mpidr_ecore_bit() {
        assert!(mpidr_is_ecore(0x8000_0000));
        assert!(!mpidr_is_ecore(0x8001_0000));
        assert!(!mpidr_is_ecore(MPIDR_PCORE_BIT | 0x3));
    }

    #[test]
    fn test_tracing_logs_and_forwards() {
        let console = Console::with_level(String::<512>::new(), DebugLevel::Trace);
        let mut regs = TracingRegisters::new(Plain::default(), console);

        regs.set_bits(SysReg::Hid16, 1 << 54);
        regs.write(SysReg::Hid27, 0x2B00);

        let (mut inner, console) = regs.into_parts();
        assert_eq!(inner.read(SysReg::Hid16), 1 << 54);
        assert_eq!(inner.read(SysReg::Hid27), 0x2B00);

        let log = console.writer().as_str();
        assert!(log.contains("set Hid16 |= 0x0040000000000000"));
        assert!(log.contains("msr Hid27 (s3_0_c15_c0_4) = 0x0000000000002b00"));
    }

    #[test]
    fn test_tracing_is_silent_below_trace() {
        let console = Console::new(String::<64>::new());
        let mut regs = TracingRegisters::new(Plain::default(), console);
        regs.clear_bits(SysReg::Hid3, 1 << 4);
        let (_, console) = regs.into_parts();
        assert!(console.writer().is_empty());
    }
}
