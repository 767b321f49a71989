//! Performance Monitor and Error Status Registers
//!
//! Core PMU (`PMCR0`..`PMC9`), uncore PMU (`UPMCR0`/`UPMSR`) and the
//! per-unit error status registers. Chicken-bit setup never touches these,
//! but they live in the same implementation-defined space and their layout
//! is part of the register table.

#![deny(missing_docs)]

use super::{bit, genmask, low_mask, BitField, SysReg};

/// PMCR0 counter-enable bits: counters 0-7 in bits 7:0, 8-9 in bits 33:32
pub const PMCR0_CNT_EN_MASK: u64 = low_mask(8) | genmask(33, 32);

/// PMCR0 interrupt mode field
pub const PMCR0_IMODE: BitField = BitField::from_mask(7 << 8);

/// PMCR0 interrupt active
pub const PMCR0_IACT: u64 = bit(11);

/// Distance between a counter's enable bit and its PMI enable bit
pub const PMCR0_PMI_SHIFT: u32 = 12;

/// Counter enable and PMI enable bits together
pub const PMCR0_CNT_MASK: u64 = PMCR0_CNT_EN_MASK | (PMCR0_CNT_EN_MASK << PMCR0_PMI_SHIFT);

/// L2C_ERR_STS recursive fault
pub const L2C_ERR_STS_RECURSIVE_FAULT: u64 = bit(1);

/// L2C_ERR_STS access fault
pub const L2C_ERR_STS_ACCESS_FAULT: u64 = bit(7);

/// L2C_ERR_STS write-one-to-clear enable
pub const L2C_ERR_STS_ENABLE_W1C: u64 = bit(56);

/// UPMCR0 interrupt mode field
pub const UPMCR0_IMODE: BitField = BitField::from_mask(7 << 16);

/// UPMSR interrupt active
pub const UPMSR_IACT: u64 = bit(0);

/// Where a PMU overflow interrupt is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum InterruptMode {
    /// No interrupt
    Off = 0,
    /// Core PMI. Core PMU only.
    Pmi = 1,
    /// Through the AIC
    Aic = 2,
    /// Halt the core
    Halt = 3,
    /// FIQ
    Fiq = 4,
}

impl InterruptMode {
    /// PMCR0 bits selecting this mode
    pub const fn pmcr0(self) -> u64 {
        PMCR0_IMODE.val(self as u64)
    }

    /// UPMCR0 bits selecting this mode, `None` for [`InterruptMode::Pmi`]
    pub const fn upmcr0(self) -> Option<u64> {
        match self {
            Self::Pmi => None,
            _ => Some(UPMCR0_IMODE.val(self as u64)),
        }
    }
}

/// Core PMU counters in index order
pub const PMC: [SysReg; 10] = [
    SysReg::Pmc0,
    SysReg::Pmc1,
    SysReg::Pmc2,
    SysReg::Pmc3,
    SysReg::Pmc4,
    SysReg::Pmc5,
    SysReg::Pmc6,
    SysReg::Pmc7,
    SysReg::Pmc8,
    SysReg::Pmc9,
];
