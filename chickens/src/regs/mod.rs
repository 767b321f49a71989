//! Apple Implementation-Defined System Registers
//!
//! This module names every implementation-defined system register the
//! bring-up code knows about, together with the bit layouts of the ones that
//! carry chicken bits. None of these registers is documented by the vendor;
//! the encodings and bit positions are reverse engineered and must be kept
//! bit-for-bit.
//!
//! # Encoding
//!
//! AArch64 addresses system registers through the MRS/MSR instruction
//! encoding, a 5-tuple `(op0, op1, CRn, CRm, op2)`. The assembler spells a
//! register without an architectural name as `s<op0>_<op1>_c<CRn>_c<CRm>_<op2>`.
//!
//! ```text
//!  31      22 21 20 19 18  16 15  12 11   8 7   5 4    0
//! +----------+-----+--+------+------+------+-----+------+
//! | 11010101 | 0 L | o0 | op1 | CRn  | CRm  | op2 |  Rt  |
//! +----------+-----+--+------+------+------+-----+------+
//! ```
//!
//! # Layout
//!
//! - [`hid`]: HID/EHID chicken bit registers
//! - [`pmu`]: performance counters and error status registers
//! - [`acc`]: ACC/CYC power and clock override registers
//! - [`sprr`]: SPRR, GXF, PAuth, VM timer, IPI and AMX registers

#![deny(missing_docs)]

pub mod acc;
pub mod hid;
pub mod pmu;
pub mod sprr;

/// Exception class reported for a trapped implementation-defined instruction
pub const ESR_EC_IMPDEF: u64 = 0b111111;

/// ISS value reported for a trapped implementation-defined MSR
pub const ESR_ISS_IMPDEF_MSR: u64 = 0x20;

/// Single bit mask, zero for `n >= 64`
pub const fn bit(n: u32) -> u64 {
    match 1u64.checked_shl(n) {
        Some(mask) => mask,
        None => 0,
    }
}

/// Contiguous mask covering bits `high..=low`.
///
/// `high` is clamped to 63. Empty when `low > high` or `low >= 64`.
pub const fn genmask(high: u32, low: u32) -> u64 {
    let upper = u64::MAX >> 63u32.saturating_sub(high);
    let lower = match u64::MAX.checked_shl(low) {
        Some(mask) => mask,
        None => 0,
    };
    upper & lower
}

/// Low `n` bits set, all bits for `n >= 64`
pub const fn low_mask(n: u32) -> u64 {
    match 1u64.checked_shl(n) {
        Some(mask) => mask - 1,
        None => u64::MAX,
    }
}

/// Returns true when no two masks share a bit
pub const fn disjoint(mut masks: &[u64]) -> bool {
    let mut seen = 0u64;
    while let [mask, rest @ ..] = masks {
        if seen & *mask != 0 {
            return false;
        }
        seen |= *mask;
        masks = rest;
    }
    true
}

/// Multi-bit field within a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    mask: u64,
    shift: u32,
}

impl BitField {
    /// Field covering bits `high..=low`
    pub const fn new(high: u32, low: u32) -> Self {
        Self {
            mask: genmask(high, low),
            shift: low,
        }
    }

    /// Field described by an explicit mask, shifted to its lowest set bit
    pub const fn from_mask(mask: u64) -> Self {
        Self {
            mask,
            shift: mask.trailing_zeros(),
        }
    }

    /// Field mask in register position
    pub const fn mask(self) -> u64 {
        self.mask
    }

    /// Position of the field's lowest bit
    pub const fn shift(self) -> u32 {
        self.shift
    }

    /// Number of bits covered by the mask
    pub const fn width(self) -> u32 {
        self.mask.count_ones()
    }

    /// Shift `value` into field position.
    ///
    /// The value is not truncated to the field width; bits past the field
    /// land in the neighbouring bits. Some raw register writes rely on this.
    pub const fn val(self, value: u64) -> u64 {
        value << self.shift
    }

    /// Extract the field from a register value
    pub const fn get(self, reg: u64) -> u64 {
        (reg & self.mask) >> self.shift
    }
}

/// `(op0, op1, CRn, CRm, op2)` system register address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoding {
    /// op0 field
    pub op0: u8,
    /// op1 field
    pub op1: u8,
    /// CRn field
    pub crn: u8,
    /// CRm field
    pub crm: u8,
    /// op2 field
    pub op2: u8,
}

impl Encoding {
    /// Create an encoding from its five components
    pub const fn new(op0: u8, op1: u8, crn: u8, crm: u8, op2: u8) -> Self {
        Self {
            op0,
            op1,
            crn,
            crm,
            op2,
        }
    }

    /// Components in instruction order
    pub const fn tuple(self) -> (u8, u8, u8, u8, u8) {
        (self.op0, self.op1, self.crn, self.crm, self.op2)
    }

    /// Register selector bits as they appear in an MRS/MSR instruction
    pub const fn msr_imm(self) -> u32 {
        (self.op0 as u32) << 19
            | (self.op1 as u32) << 16
            | (self.crn as u32) << 12
            | (self.crm as u32) << 8
            | (self.op2 as u32) << 5
    }
}

impl core::fmt::Display for Encoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "s{}_{}_c{}_c{}_{}",
            self.op0, self.op1, self.crn, self.crm, self.op2
        )
    }
}

macro_rules! sys_regs {
    ($(
        $(#[$meta:meta])*
        $variant:ident = ($op0:literal, $op1:literal, $crn:literal, $crm:literal, $op2:literal),
    )+) => {
        /// Implementation-defined system register
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SysReg {
            $($(#[$meta])* $variant,)+
        }

        impl SysReg {
            /// Every known register, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Instruction encoding of the register
            pub const fn encoding(self) -> Encoding {
                match self {
                    $(Self::$variant => Encoding::new($op0, $op1, $crn, $crm, $op2),)+
                }
            }

            /// Generic assembler name, e.g. `s3_0_c15_c12_0`
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => concat!("s", $op0, "_", $op1, "_c", $crn, "_c", $crm, "_", $op2),)+
                }
            }

            /// Read the register on the executing core.
            ///
            /// # Safety
            ///
            /// The core must implement the register and the current exception
            /// level must be allowed to access it; otherwise the access traps.
            #[cfg(target_arch = "aarch64")]
            pub(crate) unsafe fn mrs(self) -> u64 {
                let value: u64;
                match self {
                    $(Self::$variant => {
                        // SAFETY: Caller guarantees the register is accessible
                        unsafe {
                            core::arch::asm!(
                                concat!("mrs {}, s", $op0, "_", $op1, "_c", $crn, "_c", $crm, "_", $op2),
                                out(reg) value,
                                options(nomem, nostack)
                            );
                        }
                    })+
                }
                value
            }

            /// Write the register on the executing core.
            ///
            /// # Safety
            ///
            /// Same requirements as [`SysReg::mrs`]. Writing chicken bits
            /// changes how the core executes everything that follows.
            #[cfg(target_arch = "aarch64")]
            pub(crate) unsafe fn msr(self, value: u64) {
                match self {
                    $(Self::$variant => {
                        // SAFETY: Caller guarantees the register is accessible
                        unsafe {
                            core::arch::asm!(
                                concat!("msr s", $op0, "_", $op1, "_c", $crn, "_c", $crm, "_", $op2, ", {}"),
                                in(reg) value,
                                options(nostack)
                            );
                        }
                    })+
                }
            }
        }
    };
}

sys_regs! {
    /// ACTLR_EL1 alias accessed from EL2 with HCR_EL2.E2H
    ActlrEl12 = (3, 6, 15, 14, 6),

    /// AMX coprocessor control, EL1 view
    AmxCtlEl1 = (3, 4, 15, 1, 4),
    /// AMX coprocessor control, EL2 view
    AmxCtlEl2 = (3, 4, 15, 4, 7),
    /// AMX coprocessor control, EL1 view accessed from EL2
    AmxCtlEl12 = (3, 4, 15, 4, 6),

    /// Alias of CNTVCT_EL0
    CntvctAliasEl0 = (3, 4, 15, 10, 6),

    /// HID0
    Hid0 = (3, 0, 15, 0, 0),
    /// EHID0 (E-core HID0)
    Ehid0 = (3, 0, 15, 0, 1),
    /// HID1
    Hid1 = (3, 0, 15, 1, 0),
    /// EHID1
    Ehid1 = (3, 0, 15, 1, 1),
    /// HID3
    Hid3 = (3, 0, 15, 3, 0),
    /// HID4
    Hid4 = (3, 0, 15, 4, 0),
    /// EHID4
    Ehid4 = (3, 0, 15, 4, 1),
    /// HID5
    Hid5 = (3, 0, 15, 5, 0),
    /// HID6
    Hid6 = (3, 0, 15, 6, 0),
    /// HID7
    Hid7 = (3, 0, 15, 7, 0),
    /// HID9
    Hid9 = (3, 0, 15, 9, 0),
    /// EHID9
    Ehid9 = (3, 0, 15, 9, 1),
    /// HID10
    Hid10 = (3, 0, 15, 10, 0),
    /// EHID10
    Ehid10 = (3, 0, 15, 10, 1),
    /// HID11
    Hid11 = (3, 0, 15, 11, 0),
    /// HID12
    Hid12 = (3, 0, 15, 12, 0),
    /// HID13. Sits at CRm 14, not 13.
    Hid13 = (3, 0, 15, 14, 0),
    /// HID14
    Hid14 = (3, 0, 15, 15, 0),
    /// HID16
    Hid16 = (3, 0, 15, 15, 2),
    /// HID18
    Hid18 = (3, 0, 15, 11, 2),
    /// EHID18
    Ehid18 = (3, 0, 15, 11, 3),
    /// EHID20
    Ehid20 = (3, 0, 15, 1, 2),
    /// HID21
    Hid21 = (3, 0, 15, 1, 3),
    /// HID26
    Hid26 = (3, 0, 15, 0, 3),
    /// HID27
    Hid27 = (3, 0, 15, 0, 4),
    /// Unnamed register that first shows up on M3-generation cores
    #[allow(non_camel_case_types)]
    S3_0_C15_C2_4 = (3, 0, 15, 2, 4),

    /// PMU control 0
    Pmcr0 = (3, 1, 15, 0, 0),
    /// PMU control 1
    Pmcr1 = (3, 1, 15, 1, 0),
    /// PMU control 2
    Pmcr2 = (3, 1, 15, 2, 0),
    /// PMU control 3
    Pmcr3 = (3, 1, 15, 3, 0),
    /// PMU control 4
    Pmcr4 = (3, 1, 15, 4, 0),
    /// PMU event select 0
    Pmesr0 = (3, 1, 15, 5, 0),
    /// PMU event select 1
    Pmesr1 = (3, 1, 15, 6, 0),
    /// PMU status
    Pmsr = (3, 1, 15, 13, 0),
    /// PMU counter 0
    Pmc0 = (3, 2, 15, 0, 0),
    /// PMU counter 1
    Pmc1 = (3, 2, 15, 1, 0),
    /// PMU counter 2
    Pmc2 = (3, 2, 15, 2, 0),
    /// PMU counter 3
    Pmc3 = (3, 2, 15, 3, 0),
    /// PMU counter 4
    Pmc4 = (3, 2, 15, 4, 0),
    /// PMU counter 5
    Pmc5 = (3, 2, 15, 5, 0),
    /// PMU counter 6
    Pmc6 = (3, 2, 15, 6, 0),
    /// PMU counter 7
    Pmc7 = (3, 2, 15, 7, 0),
    /// PMU counter 8. CRm 8 is skipped.
    Pmc8 = (3, 2, 15, 9, 0),
    /// PMU counter 9
    Pmc9 = (3, 2, 15, 10, 0),

    /// Load/store unit error status
    LsuErrSts = (3, 3, 15, 0, 0),
    /// Load/store unit error status, E-core
    ELsuErrSts = (3, 3, 15, 2, 0),
    /// L2 cache error status
    L2cErrSts = (3, 3, 15, 8, 0),
    /// L2 cache error address
    L2cErrAdr = (3, 3, 15, 9, 0),
    /// L2 cache error info
    L2cErrInf = (3, 3, 15, 10, 0),
    /// Fetch/decode error status
    FedErrSts = (3, 4, 15, 0, 0),
    /// Fetch/decode error status, E-core
    EFedErrSts = (3, 4, 15, 0, 2),
    /// SIQ configuration
    SiqCfgEl1 = (3, 4, 15, 10, 4),
    /// MMU error status
    MmuErrSts = (3, 6, 15, 0, 0),
    /// MMU error status, E-core
    EMmuErrSts = (3, 6, 15, 2, 0),

    /// ACC configuration
    AccCfg = (3, 5, 15, 4, 0),
    /// Cycle override
    CycOvrd = (3, 5, 15, 5, 0),
    /// ACC override
    AccOvrd = (3, 5, 15, 6, 0),

    /// Uncore PMU control 0
    Upmcr0 = (3, 7, 15, 0, 4),
    /// Uncore PMU status
    Upmsr = (3, 7, 15, 6, 4),

    /// SPRR configuration
    SprrConfigEl1 = (3, 6, 15, 1, 0),
    /// GXF configuration
    GxfConfigEl1 = (3, 6, 15, 1, 2),
    /// GXF status
    GxfStatusEl1 = (3, 6, 15, 8, 0),
    /// GXF abort vector
    GxfAbortEl1 = (3, 6, 15, 8, 2),
    /// GXF enter vector
    GxfEnterEl1 = (3, 6, 15, 8, 1),
    /// GXF abort vector, EL1 view accessed from EL2
    GxfAbortEl12 = (3, 6, 15, 15, 3),
    /// GXF enter vector, EL1 view accessed from EL2
    GxfEnterEl12 = (3, 6, 15, 15, 2),
    /// SPRR permissions, EL0
    SprrPermEl0 = (3, 6, 15, 1, 5),
    /// SPRR permissions, EL1
    SprrPermEl1 = (3, 6, 15, 1, 6),
    /// SPRR permissions, EL0 view accessed from EL2
    SprrPermEl02 = (3, 4, 15, 5, 2),
    /// SPRR permissions, EL1 view accessed from EL2
    SprrPermEl12 = (3, 6, 15, 15, 7),

    /// Thread ID, GL1
    TpidrGl1 = (3, 6, 15, 10, 1),
    /// Vector base, GL1
    VbarGl1 = (3, 6, 15, 10, 2),
    /// Saved program status, GL1
    SpsrGl1 = (3, 6, 15, 10, 3),
    /// Apple saved program status, GL1
    AspsrGl1 = (3, 6, 15, 10, 4),
    /// Exception syndrome, GL1
    EsrGl1 = (3, 6, 15, 10, 5),
    /// Exception link, GL1
    ElrGl1 = (3, 6, 15, 10, 6),
    /// Fault address, GL1
    FarGl1 = (3, 6, 15, 10, 7),

    /// Vector base, GL1 view accessed from EL2
    VbarGl12 = (3, 6, 15, 9, 2),
    /// Saved program status, GL1 view accessed from EL2
    SpsrGl12 = (3, 6, 15, 9, 3),
    /// Apple saved program status, GL1 view accessed from EL2
    AspsrGl12 = (3, 6, 15, 9, 4),
    /// Exception syndrome, GL1 view accessed from EL2
    EsrGl12 = (3, 6, 15, 9, 5),
    /// Exception link, GL1 view accessed from EL2
    ElrGl12 = (3, 6, 15, 9, 6),
    /// Stack pointer, GL1 view accessed from EL2
    SpGl12 = (3, 6, 15, 10, 0),

    /// Auxiliary fault status 1, GL1
    Afsr1Gl1 = (3, 6, 15, 0, 1),

    /// VM pointer authentication key, low half
    ApvmkeyloEl2 = (3, 6, 15, 14, 4),
    /// VM pointer authentication key, high half
    ApvmkeyhiEl2 = (3, 6, 15, 14, 5),
    /// Pointer authentication status, EL1 view accessed from EL2
    ApstsEl12 = (3, 6, 15, 14, 7),

    /// Pointer authentication control, EL1
    ApctlEl1 = (3, 4, 15, 0, 4),
    /// Pointer authentication control, EL2
    ApctlEl2 = (3, 6, 15, 12, 2),
    /// Pointer authentication control, EL1 view accessed from EL2
    ApctlEl12 = (3, 6, 15, 15, 0),

    /// Guest timer FIQ enable
    VmTmrFiqEnaEl2 = (3, 5, 15, 1, 3),

    /// IPI request, local cluster
    IpiRrLocalEl1 = (3, 5, 15, 0, 0),
    /// IPI request, global
    IpiRrGlobalEl1 = (3, 5, 15, 0, 1),
    /// IPI status
    IpiSrEl1 = (3, 5, 15, 1, 1),
    /// IPI countdown
    IpiCrEl1 = (3, 5, 15, 3, 1),
}

impl core::fmt::Display for SysReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
