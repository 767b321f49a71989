//! Everest (T6031) Chicken Bits
//!
//! Fixed sequence of register updates for Everest cores. The order is part of
//! the contract: later steps may depend on the effect of earlier ones, so it
//! is reproduced exactly and tests compare against the literal sequence.
//!
//! Several values are raw writes whose field meaning is not known. They are
//! kept bit-for-bit.

use core::fmt::Write;

use static_assertions::const_assert_eq;

use crate::arch::{CoreIdentity, SystemRegisters};
use crate::chicken_log;
use crate::console::Console;
use crate::macros::DebugLevel;
use crate::regs::hid::{Ehid0, Hid13, Hid16, Hid18, Hid26, Hid27, Hid3, Hid5};
use crate::regs::{bit, genmask, SysReg};

/// HID12 bit set on every Everest core
pub const HID12_EVEREST: u64 = bit(46);

/// HID13 fields rewritten on every Everest core
pub const HID13_CLEAR: u64 = Hid13::POST_OFF_CYCLES.mask()
    | Hid13::POST_ON_CYCLES.mask()
    | Hid13::PRE_CYCLES.mask()
    | Hid13::GROUP0_FF1_DELAY.mask()
    | Hid13::GROUP0_FF2_DELAY.mask()
    | Hid13::GROUP0_FF3_DELAY.mask()
    | Hid13::GROUP0_FF4_DELAY.mask()
    | Hid13::GROUP0_FF5_DELAY.mask()
    | Hid13::GROUP0_FF6_DELAY.mask()
    | Hid13::GROUP0_FF7_DELAY.mask()
    | Hid13::RESET_CYCLES.mask();

/// Dummy cycle configuration, likely a temperature sensor workaround for
/// NEX power gating
pub const HID13_SET: u64 = Hid13::POST_OFF_CYCLES.val(4)
    | Hid13::POST_ON_CYCLES.val(5)
    | Hid13::PRE_CYCLES.val(1)
    | Hid13::GROUP0_FF1_DELAY.val(4)
    | Hid13::GROUP0_FF2_DELAY.val(4)
    | Hid13::GROUP0_FF3_DELAY.val(4)
    | Hid13::GROUP0_FF4_DELAY.val(4)
    | Hid13::GROUP0_FF5_DELAY.val(4)
    | Hid13::GROUP0_FF6_DELAY.val(4)
    | Hid13::GROUP0_FF7_DELAY.val(4)
    | Hid13::RESET_CYCLES.val(0);

/// Raw HID26 value.
///
/// The GROUP1 argument is wider than its 8-bit field and spills into the
/// bits above it.
pub const HID26_EVEREST: u64 =
    Hid26::GROUP1_OFFSET.val(0xF_88F6_5588) | Hid26::GROUP2_OFFSET.val(0x3F28);

/// Raw HID27 value
pub const HID27_EVEREST: u64 = bit(0)
    | bit(4)
    | Hid27::GROUP3_OFFSET.val(0x2B)
    | bit(16)
    | bit(20)
    | bit(24)
    | bit(28)
    | bit(32)
    | bit(36)
    | bit(40);

/// Bits cleared in `s3_0_c15_c2_4`, a register first seen on this generation
pub const S3_0_C15_C2_4_CLEAR: u64 = bit(0) | bit(1) | bit(16) | bit(17) | bit(18) | bit(22);

/// PCIe throttle limit field as laid out on T6031
pub const HID3_T6031_THROTTLE_MASK: u64 = genmask(62, 56);

/// Throttle limit programmed into [`HID3_T6031_THROTTLE_MASK`]
pub const HID3_T6031_THROTTLE_SET: u64 = bit(60) | bit(59) | bit(58);

/// HID3 bit cleared on T6031
pub const HID3_T6031_CLEAR: u64 = bit(4);

const_assert_eq!(HID26_EVEREST, 0x0003_F28F_88F6_5588);
const_assert_eq!(HID27_EVEREST, 0x0111_1111_2B11);
const_assert_eq!(HID3_T6031_THROTTLE_MASK, 0x7F00_0000_0000_0000);

/// Apply the Everest chicken bits to the executing core.
///
/// `rev` is the decoded core revision; no step depends on it yet.
pub fn init_t6031_everest<R, C, W>(regs: &mut R, core: &C, console: &mut Console<W>, rev: u32)
where
    R: SystemRegisters + ?Sized,
    C: CoreIdentity + ?Sized,
    W: Write,
{
    console.puts("Everest\n");
    chicken_log!(console, DebugLevel::Debug, "T6031 Everest rev {rev:#x}");

    init_common_everest(regs, core, console);

    regs.set_bits(SysReg::Hid3, Hid3::DEV_PCIE_THROTTLE_ENABLE.bits());
    regs.mask_bits(SysReg::Hid3, HID3_T6031_THROTTLE_MASK, HID3_T6031_THROTTLE_SET);
    regs.clear_bits(SysReg::Hid3, HID3_T6031_CLEAR);
    regs.set_bits(SysReg::Hid18, (Hid18::AVL_UNK27 | Hid18::AVL_UNK29).bits());
    regs.set_bits(SysReg::Hid16, Hid16::AVL_UNK12.bits());
    regs.mask_bits(SysReg::Hid5, Hid5::BLZ_UNK_19_18.mask(), Hid5::BLZ_UNK19.bits());
}

fn init_common_everest<R, C, W>(regs: &mut R, core: &C, console: &mut Console<W>)
where
    R: SystemRegisters + ?Sized,
    C: CoreIdentity + ?Sized,
    W: Write,
{
    regs.set_bits(SysReg::Hid12, HID12_EVEREST);
    if core.is_ecore() {
        chicken_log!(console, DebugLevel::Debug, "E-core, setting EHID0 BLI_UNK32");
        regs.set_bits(SysReg::Ehid0, Ehid0::BLI_UNK32.bits());
    }

    regs.mask_bits(SysReg::Hid13, HID13_CLEAR, HID13_SET);

    regs.write(SysReg::Hid26, HID26_EVEREST);
    regs.write(SysReg::Hid27, HID27_EVEREST);

    regs.set_bits(SysReg::Hid16, bit(54));
    regs.clear_bits(SysReg::S3_0_C15_C2_4, S3_0_C15_C2_4_CLEAR);
}
