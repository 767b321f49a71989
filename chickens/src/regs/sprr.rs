//! SPRR, GXF, Pointer Authentication, VM Timer, IPI and AMX Registers
//!
//! Only the bits bring-up code has a name for are listed; the registers
//! themselves are all in [`SysReg`](super::SysReg).

#![deny(missing_docs)]

use bitflags::bitflags;

use super::bit;

bitflags! {
    /// AMX_CTL_EL1 / AMX_CTL_EL2 / AMX_CTL_EL12
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AmxCtl: u64 {
        /// AMX enabled
        const EN = bit(63);
        /// AMX usable from EL1
        const EN_EL1 = bit(62);
    }
}

bitflags! {
    /// SPRR_CONFIG_EL1
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SprrConfig: u64 {
        /// SPRR enabled
        const EN = bit(0);
        /// Configuration locked
        const LOCK_CONFIG = bit(1);
        /// Permissions locked
        const LOCK_PERM = bit(4);
        /// Kernel permissions locked
        const LOCK_KERNEL_PERM = bit(5);
    }
}

bitflags! {
    /// GXF_CONFIG_EL1
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GxfConfig: u64 {
        /// Guarded execution enabled
        const EN = bit(0);
    }
}

bitflags! {
    /// GXF_STATUS_EL1
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GxfStatus: u64 {
        /// Core is executing in guarded mode
        const GUARDED = bit(0);
    }
}

bitflags! {
    /// VM_TMR_FIQ_ENA_EL2
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VmTmrFiqEna: u64 {
        /// Virtual timer FIQ enable
        const ENA_V = bit(0);
        /// Physical timer FIQ enable
        const ENA_P = bit(1);
    }
}

bitflags! {
    /// IPI_SR_EL1
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IpiSr: u64 {
        /// Fast IPI pending
        const PENDING = bit(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_bits() {
        assert_eq!(AmxCtl::all().bits(), 0xC000_0000_0000_0000);
        assert_eq!(SprrConfig::all().bits(), 0x33);
        assert_eq!(VmTmrFiqEna::all().bits(), 0x3);
        assert_eq!(GxfConfig::EN.bits(), IpiSr::PENDING.bits());
        assert_eq!(GxfStatus::GUARDED.bits(), 1);
    }
}
