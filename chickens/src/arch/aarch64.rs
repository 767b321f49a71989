//! AArch64 Hardware Backend
//!
//! Register access on the executing core. Implementation-defined registers
//! go through the `mrs`/`msr` dispatch generated alongside [`SysReg`];
//! architectural identification registers come from `aarch64-cpu`.
//!
//! # Privilege
//!
//! HID registers are only reachable from EL2 (or EL1 when the firmware has
//! not locked them down). At EL0 every access here traps.

#![deny(missing_docs)]
#![warn(clippy::undocumented_unsafe_blocks)]

use aarch64_cpu::asm::barrier;
use aarch64_cpu::registers::{MIDR_EL1, MPIDR_EL1};
use tock_registers::interfaces::Readable;

use super::{mpidr_is_ecore, CoreIdentity, SystemRegisters};
use crate::regs::SysReg;

/// The executing core's own register bank
#[derive(Debug)]
pub struct Cpu {
    _private: (),
}

impl Cpu {
    /// Handle to the executing core.
    ///
    /// # Safety
    ///
    /// Must run on an Apple core at an exception level that can access the
    /// implementation-defined registers, and the value must stay on the
    /// core that created it.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }

    /// Make preceding register writes visible to following instructions
    pub fn sync(&self) {
        barrier::isb(barrier::SY);
    }
}

impl SystemRegisters for Cpu {
    fn read(&mut self, reg: SysReg) -> u64 {
        // SAFETY: Cpu::new requires the registers to be accessible here
        unsafe { reg.mrs() }
    }

    fn write(&mut self, reg: SysReg, value: u64) {
        // SAFETY: Cpu::new requires the registers to be accessible here
        unsafe { reg.msr(value) }
    }
}

/// Identification registers of the executing core
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreId;

impl CoreId {
    /// Raw MPIDR_EL1
    pub fn mpidr(&self) -> u64 {
        MPIDR_EL1.get()
    }
}

impl CoreIdentity for CoreId {
    fn is_ecore(&self) -> bool {
        mpidr_is_ecore(self.mpidr())
    }

    fn midr(&self) -> u64 {
        MIDR_EL1.get()
    }
}
