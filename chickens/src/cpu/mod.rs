//! Per-Core Chicken Bit Dispatch
//!
//! Every core runs [`init_cpu_chickens`] once, early in bring-up, before it
//! does any real work. MIDR_EL1 selects the microarchitecture routine; the
//! routine then programs that core's own HID registers.
//!
//! Only T6031 is known here. Its E-cluster (Sawtooth) and P-cluster
//! (Everest) report different part numbers but share one routine, which
//! checks the core type itself. Other parts are reported as [`ChickenError`]
//! without touching any register.

#![deny(missing_docs)]

use core::fmt::Write;

use crate::arch::{CoreIdentity, SystemRegisters};
use crate::chicken_log;
use crate::console::Console;
use crate::macros::DebugLevel;
use crate::regs::BitField;
use crate::{ChickenError, ChickenResult};

pub mod everest;

/// MIDR_EL1 implementer code for Apple
pub const MIDR_IMPLEMENTER_APPLE: u8 = 0x61;

/// Decoded MIDR_EL1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Midr(pub u64);

impl Midr {
    /// Implementer field
    pub const IMPLEMENTER: BitField = BitField::new(31, 24);
    /// Major revision
    pub const VARIANT: BitField = BitField::new(23, 20);
    /// Architecture field
    pub const ARCHITECTURE: BitField = BitField::new(19, 16);
    /// Part number
    pub const PART_NUM: BitField = BitField::new(15, 4);
    /// Minor revision
    pub const REVISION: BitField = BitField::new(3, 0);

    /// Implementer code
    pub const fn implementer(self) -> u8 {
        Self::IMPLEMENTER.get(self.0) as u8
    }

    /// Major revision
    pub const fn variant(self) -> u8 {
        Self::VARIANT.get(self.0) as u8
    }

    /// Architecture code
    pub const fn architecture(self) -> u8 {
        Self::ARCHITECTURE.get(self.0) as u8
    }

    /// Part number
    pub const fn part_num(self) -> u16 {
        Self::PART_NUM.get(self.0) as u16
    }

    /// Minor revision
    pub const fn revision(self) -> u8 {
        Self::REVISION.get(self.0) as u8
    }

    /// Combined revision handed to the per-part routine: variant in the
    /// high nibble, revision in the low nibble
    pub const fn rev(self) -> u32 {
        ((self.variant() as u32) << 4) | self.revision() as u32
    }
}

/// Apple cores with a chicken bit routine.
///
/// E-cluster parts sit one below their P-cluster partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum CorePart {
    /// M3 Max efficiency cluster
    T6031Sawtooth = 0x48,
    /// M3 Max performance cluster
    T6031Everest = 0x49,
}

impl TryFrom<u16> for CorePart {
    type Error = u16;

    fn try_from(part: u16) -> Result<Self, Self::Error> {
        match part {
            0x48 => Ok(Self::T6031Sawtooth),
            0x49 => Ok(Self::T6031Everest),
            other => Err(other),
        }
    }
}

impl CorePart {
    /// Short name for boot logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::T6031Sawtooth => "T6031 Sawtooth",
            Self::T6031Everest => "T6031 Everest",
        }
    }
}

/// Identify the executing core and apply its chicken bits.
///
/// Returns the part that was programmed. On error no register has been
/// touched.
pub fn init_cpu_chickens<R, C, W>(
    regs: &mut R,
    core: &C,
    console: &mut Console<W>,
) -> ChickenResult<CorePart>
where
    R: SystemRegisters + ?Sized,
    C: CoreIdentity + ?Sized,
    W: Write,
{
    let midr = Midr(core.midr());
    chicken_log!(console, DebugLevel::Debug, "MIDR_EL1 = {:#010x}", midr.0);

    let implementer = midr.implementer();
    if implementer != MIDR_IMPLEMENTER_APPLE {
        chicken_log!(console, DebugLevel::Warning, "unknown implementer {implementer:#04x}");
        return Err(ChickenError::UnknownImplementer(implementer));
    }

    let rev = midr.rev();
    let part = CorePart::try_from(midr.part_num()).map_err(|part| {
        chicken_log!(console, DebugLevel::Warning, "no chicken bits for part {part:#x} rev {rev:#x}");
        ChickenError::UnsupportedPart { part, revision: rev }
    })?;

    chicken_log!(
        console,
        DebugLevel::Info,
        "{} rev {rev:#x} ({})",
        part.name(),
        if core.is_ecore() { "E-core" } else { "P-core" }
    );

    match part {
        CorePart::T6031Sawtooth | CorePart::T6031Everest => {
            everest::init_t6031_everest(regs, core, console, rev);
        }
    }

    Ok(part)
}

/// [`init_cpu_chickens`] on the executing core's own registers.
///
/// With the `trace-regs` feature every register operation is also logged at
/// [`DebugLevel::Trace`].
///
/// # Safety
///
/// Same requirements as [`Cpu::new`](crate::arch::aarch64::Cpu::new).
#[cfg(target_arch = "aarch64")]
pub unsafe fn init_cpu_chickens_hw<W: Write + Clone>(
    console: &mut Console<W>,
) -> ChickenResult<CorePart> {
    use crate::arch::aarch64::{CoreId, Cpu};

    // SAFETY: forwarded to the caller
    let mut cpu = unsafe { Cpu::new() };

    #[cfg(feature = "trace-regs")]
    let result = {
        let mut traced = crate::arch::TracingRegisters::new(&mut cpu, console.clone());
        init_cpu_chickens(&mut traced, &CoreId, console)
    };
    #[cfg(not(feature = "trace-regs"))]
    let result = init_cpu_chickens(&mut cpu, &CoreId, console);

    cpu.sync();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::mock::{MockCore, MockRegisters};
    use crate::regs::SysReg;
    use heapless::String;

    #[test]
    fn test_midr_decode() {
        let midr = Midr(0x611F_0490);
        assert_eq!(midr.implementer(), MIDR_IMPLEMENTER_APPLE);
        assert_eq!(midr.variant(), 1);
        assert_eq!(midr.architecture(), 0xF);
        assert_eq!(midr.part_num(), 0x49);
        assert_eq!(midr.revision(), 0);
        assert_eq!(midr.rev(), 0x10);
        assert_eq!(Midr(0x612F_0493).rev(), 0x23);
    }

    #[test]
    fn test_part_lookup() {
        assert_eq!(CorePart::try_from(0x48), Ok(CorePart::T6031Sawtooth));
        assert_eq!(CorePart::try_from(0x49), Ok(CorePart::T6031Everest));
        assert_eq!(CorePart::try_from(0x4A), Err(0x4A));
        assert_eq!(CorePart::T6031Sawtooth as u16, 0x48);
        assert_eq!(CorePart::T6031Everest as u16, 0x49);
    }

    #[test]
    fn test_dispatch_runs_everest() {
        let mut regs = MockRegisters::new();
        let mut console = Console::new(String::<256>::new());
        let part = init_cpu_chickens(&mut regs, &MockCore::pcore(0x611F_0490), &mut console);

        assert_eq!(part, Ok(CorePart::T6031Everest));
        assert_eq!(regs.peek(SysReg::Hid26), everest::HID26_EVEREST);
        assert!(console.writer().starts_with("[CHICKENS] INFO: T6031 Everest rev 0x10 (P-core)\n"));
        assert!(console.writer().ends_with("Everest\n"));
    }

    #[test]
    fn test_dispatch_rejects_other_implementer() {
        let mut regs = MockRegisters::new();
        let mut console = Console::new(String::<256>::new());
        let result = init_cpu_chickens(&mut regs, &MockCore::pcore(0x410F_D0C0), &mut console);

        assert_eq!(result, Err(ChickenError::UnknownImplementer(0x41)));
        assert!(regs.trace().is_empty());
    }

    #[test]
    fn test_dispatch_runs_everest_on_ecore_part() {
        let mut regs = MockRegisters::new();
        let mut console = Console::new(String::<256>::new());
        let part = init_cpu_chickens(&mut regs, &MockCore::ecore(0x611F_0480), &mut console);

        assert_eq!(part, Ok(CorePart::T6031Sawtooth));
        assert_eq!(regs.peek(SysReg::Ehid0), 1 << 32);
        assert_eq!(regs.peek(SysReg::Hid26), everest::HID26_EVEREST);
        assert!(console.writer().starts_with("[CHICKENS] INFO: T6031 Sawtooth rev 0x10 (E-core)\n"));
    }

    #[test]
    fn test_dispatch_rejects_other_part() {
        let mut regs = MockRegisters::new();
        let mut console = Console::new(String::<256>::new());
        let result = init_cpu_chickens(&mut regs, &MockCore::ecore(0x6111_0321), &mut console);

        assert_eq!(result, Err(ChickenError::UnsupportedPart { part: 0x32, revision: 0x11 }));
        assert!(regs.trace().is_empty());
        assert!(console.writer().contains("no chicken bits for part 0x32 rev 0x11"));
    }
}
