//! HID / EHID Chicken Bit Registers
//!
//! Bit layouts of the "hardware implementation dependent" registers. The `H`
//! registers belong to performance cores, the `E` variants to efficiency
//! cores; where a layout is shared the same type serves both.
//!
//! Single-bit features are `bitflags` flags. Multi-bit fields are
//! [`BitField`] associated constants on the same type, so
//! `Hid13::PRE_CYCLES.val(1)` reads the way the register is documented.
//!
//! Names follow the reverse-engineered register documentation; bits named
//! `UNK`, `SPARE` or `UNUSED` have no known meaning beyond their position.
//! Individual flag and field constants are therefore left undocumented;
//! the bits this crate programs say why where it is known.
//!
//! # Aliases
//!
//! - [`Ehid4::STNT_COUNTER_THRESHOLD`] covers the same bits as
//!   [`Ehid4::DISABLE_HW_PREF_ZOMBIES`] and
//!   [`Ehid4::DISABLE_HW_PREF_ZOMBIES_LNCH_TO_CIF`].
//! - [`Ehid20`] carries two layouts: the `BLZ_` names are the Blizzard
//!   layout, the unprefixed names are the older one, shifted down by one bit.

// Flag and field constants only, see module docs
#![allow(missing_docs)]

use bitflags::bitflags;
use static_assertions::const_assert;

use super::{bit, disjoint, BitField};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid0: u64 {
        const FETCH_WIDTH_DISABLE = bit(28);
        const CACHE_FUSION_DISABLE = bit(36);
        const SAME_PG_POWER_OPTIMIZATION = bit(45);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Ehid0: u64 {
        /// Set on every Everest E-core
        const BLI_UNK32 = bit(32);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid1: u64 {
        const RSS_FORCE_NS_ISSUE = bit(0);
        const RSS_FORCE_NS_SPR_RD = bit(1);
        const RSS_DIS_NS_STREAMING = bit(2);
        const REDIR_FORCE_SPR_SYNC = bit(3);
        const LSP_DISABLE = bit(4);
        const FORCE_SSBS_ORDERING = bit(5);
        const LSP_AGE_OUT_INTERVAL = bit(6);
        const DIS_INT_ZCM = bit(8);
        const DIS_NEON_ZCM = bit(9);
        const FORCE_SPR_L3_CLK_ON = bit(10);
        const DIS_MULT_RETIRE = bit(11);
        const DIS_MULT_INDIR_BR_RETIRE = bit(12);
        const DIS_BR_DISP_SYS_RSLVD_PTR = bit(13);
        const DIS_CMP_BR_FUSION = bit(14);
        const FORCE_NEX_L3_CLK_ON = bit(15);
        const INTDISP_LIM_MODE = bit(16);
        const NEON_DISP_LIM_MODE = bit(17);
        const FORCE_PRECISE_NEON_GRP_MODE = bit(18);
        const RCC_FORCE_ALL_MDR_L6_CLKS_ON = bit(19);
        const RCC_FORCE_ALL_MDR_L3_CLKS_ON = bit(20);
        const RCC_DIS_STALL_INACTIVE_MDR_CTL = bit(21);
        const DIS_SPEC_MDSB_INVL_ROB_FLUSH = bit(24);
        const DIS_LSP_FLUSH_WITH_CONTEXT_SWITCH = bit(25);
        const DIS_WFE = bit(26);
        const DIS_WFI = bit(27);
        const EN_CS_RFOR_SP_SEL_IMM = bit(28);
        const RCC_FORCE_CHKPT_L3_CLKS_ON = bit(29);
        const DISABLE_CHKPT = bit(30);
        const EN_SICILY_SDSB = bit(31);
        const FORCE_WFE = bit(32);
        const FORCE_GRP_BNDRY_ON_INST_END = bit(33);
        const FORCE_GRP_BNDRY_ON_UCODE_END = bit(34);
        const DIS_LCL_TIME_BASE = bit(35);
        const EN_CS_RFOR_PAN_IMM = bit(36);
        const EN_CS_RFOR_AMXT_IMM = bit(37);
        const CONSERVATIVE_SIQ = bit(44);
        const DIS_AES_FUSION = bit(45);
        const RSS_DIS_MULTIPLE_CPM_IN_FLIGHT = bit(46);
        const DIS_HW_TRACE_SYNC = bit(47);
        const DIS_HW_TRACE_SYNC_ON_UARCH_REDIR = bit(48);
        const DIS_MSR_SPEC_DAIF = bit(49);
        const DIS_MRS_SPEC_DAIF = bit(50);
        const DIS_MSR_SPEC_NON_DAIF = bit(51);
        const DIS_MRS_SPEC_NON_DAIF = bit(52);
        const DIS_DBG_PROG_OVRD = bit(53);
        const TRAP_SMC = bit(54);
        const ENABLE_MDSB_STALL_PIPELINE_ECO = bit(58);
        const ENABLE_BR_KILL_LIMIT = bit(60);
        const CPMU_DEBUG_OVF = bit(61);
        const ZCL_RF_GNUM_DIST_MODE = bit(62);
    }
}

impl Hid1 {
    pub const ZCL_RF_RESTART_THRESHOLD: BitField = BitField::new(23, 22);
    pub const ZCL_SP_MISPREDICT_THRESHOLD: BitField = BitField::new(39, 38);
    pub const ZCL_SP_RESTART_THRESHOLD: BitField = BitField::new(41, 40);
    pub const ZCL_RF_MISPREDICT_THRESHOLD: BitField = BitField::new(43, 42);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Ehid1: u64 {
        const RSS_FORCE_NS_ISSUE = bit(0);
        const RSS_FORCE_NS_SPR_RD = bit(1);
        const RSS_DIS_NS_STREAMING = bit(2);
        const REDIR_FORCE_SPR_SYNC = bit(3);
        const RSS_DIS_MULTIPLE_CPM_IN_FLIGHT = bit(8);
        const EN_CS_RFOR_AMXSETCLR = bit(9);
        const FORCE_SPR_L3_CLK_ON = bit(10);
        const DIS_MULT_RETIRE = bit(11);
        const DIS_MULT_INDIR_BR_RETIRE = bit(12);
        const DIS_BR_SYS_RSLV_PTR = bit(13);
        const DIS_CMP_BR_FUSION = bit(14);
        const FORCE_NEX_L3_CLK_ON = bit(15);
        const DIS_LCL_TIME_BASE = bit(16);
        const NEON_DISP_LIM_MODE = bit(17);
        const EN_CS_RFOR_PAN_IMM = bit(18);
        const RCC_FORCE_ALL_MDR_L6_CLKS_ON = bit(19);
        const RCC_FORCE_ALL_MDR_L3_CLKS_ON = bit(20);
        const RCC_DIS_STALL_INACTIVE_MDR_CTL = bit(21);
        const RCC_FORCE_ALL_IEX_L6_CLKS_ON = bit(22);
        const RCC_FORCE_ALL_IEX_L3_CLKS_ON = bit(23);
        const RCC_DIS_STALL_INACTIVE_IEX_CTL = bit(24);
        const DIS_LSP_FLUSH_WITH_CONTEXT_SWITCH = bit(25);
        const DIS_WFE = bit(26);
        const DIS_WFI = bit(27);
        const EN_CS_RFOR_SP_SEL_IMM = bit(28);
        const DIS_LSP_TRAIN_FILTER = bit(29);
        const DIS_MSR_SPEC_DAIF = bit(30);
        const DISABLE_CMP_BR_ACROSS_GRP = bit(31);
        const FORCE_WFE = bit(32);
        const FORCE_GRP_BNDRY_ON_INST_END = bit(33);
        const FORCE_GRP_BNDRY_ON_UCODE_END = bit(34);
        const DIS_MRS_SPEC_DAIF = bit(47);
        const PCSAMPLE_ALLRETIRES = bit(48);
        const DIS_AES_FUSION = bit(49);
        const DIS_ZCM = bit(50);
        const DIS_RETIRE_GREATER_THAN_TWO_GROUPS = bit(51);
        const EN_LFSR_STALL_RS01 = bit(59);
        const EN_LFSR_STALL_RS4 = bit(60);
        const CPMU_DEBUG_OVF = bit(61);
        const EN_LFSR_STALL_RS6 = bit(62);
        const EN_LFSR = bit(63);
    }
}

impl Ehid1 {
    pub const LSP_MODE: BitField = BitField::new(5, 4);
    pub const LSP_AGE_OUT_INTERVAL: BitField = BitField::new(7, 6);
    pub const LSP_CNT_INIT_VALUE: BitField = BitField::new(37, 35);
    pub const LSP_CNT_RETRAIN_VALUE: BitField = BitField::new(40, 38);
    pub const LSP_CNT_INC_VALUE: BitField = BitField::new(43, 41);
    pub const LSP_CNT_RPLY_INIT_VALUE: BitField = BitField::new(46, 44);
    pub const LFSR_SEED: BitField = BitField::new(58, 52);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid3: u64 {
        const DISABLE_ARBITER_FIX_BIF_CRD = bit(44);
        const DEV_PCIE_THROTTLE_ENABLE = bit(63);
    }
}

impl Hid3 {
    /// Everest writes this region through a wider 62:56 mask
    pub const DEV_PCIE_THROTTLE_LIMIT: BitField = BitField::new(62, 57);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid4: u64 {
        const INV_CORE_CLK_OBS_TO_SOC = bit(0);
        const DISABLE_STNT_WIDGET = bit(1);
        const DISABLE_SW_PRELOAD = bit(2);
        const DISABLE_ST_LD_REDIR_MULTI_HIT_CHK = bit(3);
        const FORCE_CPU_OLDEST_IN_ORDER = bit(4);
        const FORCE_S_STEP_STORE_COMMIT = bit(5);
        const FORCE_S_STEP_PASS2_TO_CIF = bit(6);
        const FORCE_ST_LNCH_NO_OLDER_LD = bit(7);
        const DISABLE_LD_RTR_AHEAD_OLDER_ST = bit(8);
        const DISABLE_SPEC_LS_REDIRECT = bit(9);
        const DISABLE_SPEC_LDREX_PLAN_B = bit(10);
        const DISABLE_DC_MVA = bit(11);
        const ENABLE_CORE_CLK_OBS_TO_SOC = bit(12);
        const RCC_FORCE_ALL_LSI_L6_CLKS_ON = bit(13);
        const RCC_FORCE_ALL_LSU_L3_CLKS_ON = bit(14);
        const RCC_DIS_STALL_INACTIVE_LSU_CTL = bit(15);
        const DIS_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION = bit(16);
        const DIS_ST_RTR_AHEAD_OLDER_LD = bit(32);
        const DIS_SPEC_LNCH_READ = bit(33);
        const FORCE_NS_ORD_LD_REQ_NO_OLDER_ST = bit(34);
        const FORCE_YNG_LD_FLUSH_ON_BAR_OP = bit(37);
        const FORCE_YNG_LD_FLUSH_ON_LD_ACQ = bit(38);
        const FORCE_NS_ORD_LD_REQ_NO_OLDER_LD = bit(39);
        const FORCE_BAR_LNCH_NO_OLDER_ST = bit(42);
        const DISABLE_PWR_SAVE_LNBUF_CLK_OFF = bit(43);
        const DISABLE_DC_SW_L2_OPS = bit(44);
        const FORCE_NS_ORD_LD_REQ_NO_IN_PIPE_ORD_LD = bit(45);
        const ENABLE_LFSR_STALL_LDQ_RTR = bit(48);
        const ENABLE_LFSR_STALL_LOAD_PIPE2_ISSUE = bit(49);
        const ENABLE_LFSR_STALL_PASS2_LAUNCH = bit(50);
        const ENABLE_LFSR_STALL_LOAD_STORE_PIPE1_ISSUE = bit(51);
        const ENABLE_LFSR_STALL_LOAD_STORE_PIPE0_ISSUE = bit(52);
        const ENABLE_LFSR_STALL_STQ_REPLAY = bit(53);
        const ENABLE_LFSR_STALL_LDQ_REPLAY = bit(54);
        const ENABLE_LFSR_STALL_SMB_DRAIN = bit(55);
        const ENABLE_LFSR = bit(63);
    }
}

impl Hid4 {
    pub const CT0_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION: BitField = BitField::new(19, 17);
    pub const CT1_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION: BitField = BitField::new(22, 20);
    pub const CT2_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION: BitField = BitField::new(25, 23);
    pub const CT0_ANTI_LIVELOCK_ON_OLDEST_LD_ST_REPLAY: BitField = BitField::new(28, 26);
    pub const CT0_ANTI_LIVELOCK_ON_LS_ISS_STALL_ON_LS_REPLAY: BitField = BitField::new(31, 29);
    pub const NON_CNTG_THRESH: BitField = BitField::new(36, 35);
    pub const CNF_CNTR_THRESH: BitField = BitField::new(41, 40);
    pub const ENABLE_LFSR_STALL_STQ_RTR: BitField = BitField::new(47, 46);
    pub const LFSR_SEED: BitField = BitField::new(62, 56);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Ehid4: u64 {
        const DISABLE_HW_PREF_LD = bit(0);
        const DISABLE_HW_PREF_ST = bit(1);
        const DISABLE_SW_PRELOAD = bit(2);
        const DISABLE_ST_LD_REDIR_MULTI_HIT_CHK = bit(3);
        const FORCE_CPU_OLDEST_IN_ORDER = bit(4);
        const FORCE_S_STEP_STORE_COMMIT = bit(5);
        const FORCE_S_STEP_PASS2_TO_CIF = bit(6);
        const FORCE_ST_LNCH_NO_OLDER_LD = bit(7);
        const DISABLE_LD_RTR_AHEAD_OLDER_ST = bit(8);
        const DISABLE_SPEC_LS_REDIRECT = bit(9);
        const DISABLE_SPEC_LDREX_PLAN_B = bit(10);
        const DISABLE_DC_MVA = bit(11);
        const ENABLE_CORE_CLK_OBS_TO_SOC = bit(12);
        const RCC_FORCE_ALL_LSI_L6_CLKS_ON = bit(13);
        const RCC_FORCE_ALL_LSU_L3_CLKS_ON = bit(14);
        const RCC_DIS_STALL_INACTIVE_LSU_CTL = bit(15);
        const DISABLE_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION = bit(16);
        const DISABLE_HW_PREF_PG_CROSS = bit(32);
        const DISABLE_SPEC_LNCH_READ = bit(33);
        const FORCE_NS_ORD_LD_REQ_NO_OLDER_ST = bit(34);
        const RCC_FORCE_ALL_DC_DAT_L3_EN_ON = bit(35);
        const UNUSED_36 = bit(36);
        const FORCE_YNG_LD_FLUSH_ON_BAR_OP = bit(37);
        const FORCE_YNG_LD_FLUSH_ON_LD_ACQ = bit(38);
        const FORCE_NS_ORD_LD_REQ_NO_OLDER_LD = bit(39);
        /// Overlaps `STNT_COUNTER_THRESHOLD`
        const DISABLE_HW_PREF_ZOMBIES = bit(40);
        /// Overlaps `STNT_COUNTER_THRESHOLD`
        const DISABLE_HW_PREF_ZOMBIES_LNCH_TO_CIF = bit(41);
        const FORCE_BAR_LNCH_NO_OLDER_ST = bit(42);
        const NON_ISA_FORCE_PROMOTE_WPT = bit(43);
        const DISABLE_DC_SW_L2_OPS = bit(44);
        const FORCE_NS_ORD_LD_REQ_NO_IN_PIPE_ORD_LD = bit(45);
        const ENABLE_LFSR_STALL_STQ_REPLAY = bit(48);
        const ENABLE_EN_LFSR_STALL_LDQ_REPLAY = bit(49);
        const ENABLE_LFSR_STALL_PASS2_LAUNCH = bit(50);
        const ENABLE_LFSR_STALL_LSRS1_ISSUE = bit(51);
        const ENABLE_LFSR_STALL_LSRS0_ISSUE = bit(52);
        const ENABLE_LFSR_STALL_STQ_RTR = bit(53);
        const ENABLE_LFSR_STALL_LDQ_RTR = bit(54);
        const ENABLE_LFSR_STALL_SMB_DRAIN = bit(55);
        const ENABLE_LFSR = bit(63);
    }
}

impl Ehid4 {
    pub const CT0_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION: BitField = BitField::new(19, 17);
    pub const CT1_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION: BitField = BitField::new(22, 20);
    pub const CT2_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION: BitField = BitField::new(25, 23);
    pub const CT0_ANTI_LIVELOCK_ON_OLDEST_LD_ST_REPLAY: BitField = BitField::new(28, 26);
    pub const CT0_ANTI_LIVELOCK_ON_LS_ISS_STALL_ON_LS_REPLAY: BitField = BitField::new(31, 29);
    pub const STNT_COUNTER_THRESHOLD: BitField = BitField::new(41, 40);
    pub const LFSR_SEED: BitField = BitField::new(62, 56);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid5: u64 {
        const BLZ_UNK18 = bit(18);
        const BLZ_UNK19 = bit(19);
        /// Sibling merge in the LLC can let uncached loads break ordering
        const DISABLE_FILL_2C_MERGE = bit(61);
    }
}

impl Hid5 {
    pub const BLZ_UNK_19_18: BitField = BitField::new(19, 18);
}

/// Field-only register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hid6;

impl Hid6 {
    pub const UP_CRD_TKN_INIT_C2: BitField = BitField::from_mask(0x1F << 5);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid7: u64 {
        const FORCE_NONSPEC_IF_SPEC_FLUSH_POINTER_INVALID_AND_MP_VALID = bit(16);
        const FORCE_NONSPEC_IF_STEPPING = bit(20);
    }
}

impl Hid7 {
    pub const FORCE_NONSPEC_TARGET_TIMER_SEL: BitField = BitField::from_mask(3 << 24);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid9: u64 {
        const AVL_UNK17 = bit(17);
        const TSO_ALLOW_DC_ZVA_WC = bit(26);
        const TSO_SERIALIZE_VLD_MICROOPS = bit(29);
        const FIX_BUG_51667805 = bit(48);
        const FIX_BUG_55719865 = bit(55);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Ehid9: u64 {
        const DEV_2_THROTTLE_ENABLE = bit(5);
    }
}

impl Ehid9 {
    pub const DEV_2_THROTTLE_LIMIT: BitField = BitField::new(11, 6);
}

bitflags! {
    /// Shared by HID10 and EHID10
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid10: u64 {
        const FORCE_WAIT_STATE_DRAIN_UC = bit(32);
        const DISABLE_ZVA_TEMPORAL_TSO = bit(49);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid11: u64 {
        const ENABLE_FIX_UC_55719865 = bit(15);
        const DISABLE_LD_NT_WIDGET = bit(59);
    }
}

/// NEX power gating timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hid13;

impl Hid13 {
    pub const POST_OFF_CYCLES: BitField = BitField::new(6, 0);
    pub const POST_ON_CYCLES: BitField = BitField::new(13, 7);
    pub const PRE_CYCLES: BitField = BitField::new(17, 14);
    pub const GROUP0_FF1_DELAY: BitField = BitField::new(29, 26);
    pub const GROUP0_FF2_DELAY: BitField = BitField::new(33, 30);
    pub const GROUP0_FF3_DELAY: BitField = BitField::new(37, 34);
    pub const GROUP0_FF4_DELAY: BitField = BitField::new(41, 38);
    pub const GROUP0_FF5_DELAY: BitField = BitField::new(45, 42);
    pub const GROUP0_FF6_DELAY: BitField = BitField::new(49, 46);
    pub const GROUP0_FF7_DELAY: BitField = BitField::new(53, 50);
    pub const RESET_CYCLES: BitField = BitField::from_mask(0xF << 60);

    /// Every HID13 timing field, low to high
    pub const FIELDS: [BitField; 11] = [
        Self::POST_OFF_CYCLES,
        Self::POST_ON_CYCLES,
        Self::PRE_CYCLES,
        Self::GROUP0_FF1_DELAY,
        Self::GROUP0_FF2_DELAY,
        Self::GROUP0_FF3_DELAY,
        Self::GROUP0_FF4_DELAY,
        Self::GROUP0_FF5_DELAY,
        Self::GROUP0_FF6_DELAY,
        Self::GROUP0_FF7_DELAY,
        Self::RESET_CYCLES,
    ];
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid14: u64 {
        const ENABLE_NEX_POWER_GATING = bit(32);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid16: u64 {
        const AVL_UNK12 = bit(12);
        const SPAREBIT0 = bit(56);
        const SPAREBIT3 = bit(59);
        const ENABLE_MPX_PICK_45 = bit(61);
        const ENABLE_MP_CYCLONE_7 = bit(62);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid18: u64 {
        const HVC_SPECULATION_DISABLE = bit(14);
        const AVL_UNK27 = bit(27);
        const AVL_UNK29 = bit(29);
        const SPAREBIT7 = bit(39);
        const SPAREBIT17 = bit(49);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Ehid18: u64 {
        const BLZ_UNK34 = bit(34);
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Ehid20: u64 {
        const BLZ_DIS_HW_TRACE_SYNC_ON_UARCH_REDIR = bit(0);
        const BLZ_DIS_HW_TRACE_SYNC = bit(1);
        const BLZ_DIS_AMX_FUSION_ACROSS_GRP = bit(2);
        const BLZ_LSP_FORCE_SSBS_DEP = bit(3);
        const BLZ_FORCE_FP_SYNC_PRECISE_GRP_MODE = bit(4);
        const BLZ_DIS_DBG_PROG_OVRD = bit(5);
        const BLZ_CONSERVATIVE_SIQ = bit(6);
        const BLZ_FORCE_DMB_ON_ANY_TSO_ENTRY_EXIT = bit(7);
        const BLZ_DIS_SPEC_MDSB_INVL_ROB_FLUSH = bit(8);
        const BLZ_SPARE_9 = bit(9);
        const BLZ_DIS_MSR_SPEC_NON_DAIF = bit(10);
        const BLZ_DIS_MRS_SPEC_NON_DAIF = bit(11);
        const BLZ_FORCE_IEX_DISP_BIAS_MODE2 = bit(12);
        const BLZ_FORCE_NON_SPEC_IF_SPEC_FLUSH_PTR_INVALID_AND_MP_VALID = bit(13);
        const BLZ_DIS_SPEC_MDSB_UNTRUSTED_INVL_ROB_FLUSH = bit(14);
        const BLZ_FORCE_NON_SPEC_IF_NEXT_ROB_FLUSH_DISABLED = bit(15);
        const BLZ_FORCE_NON_SPEC_IF_OLDEST_REDIR_VLD_AND_OLDER = bit(16);
        const BLZ_FORCE_NON_SPEC_IF_SPEC_FLUSH_PTR_NE_BLK_RTR_PTR = bit(17);
        const BLZ_FORCE_NON_SPEC_IF_STEPPING = bit(18);
        const BLZ_FORCE_NON_SPEC_TIMER = bit(19);
        const BLZ_DIS_LD_CBZ_TBZ_FUSION = bit(24);
        const BLZ_DIS_CMP_CSEL_FUSION = bit(25);
        const BLZ_DIS_MULT_BR_RETIRE = bit(26);
        const BLZ_DIS_INT_FV_ODD_BANKS = bit(27);
        const BLZ_DIS_NEON_FV_ODD_BANKS = bit(28);
        const BLZ_SPARE_31 = bit(31);
        const BLZ_SPARE_32 = bit(32);
        const BLZ_SPARE_33 = bit(33);
        const BLZ_SPARE_34 = bit(34);
        const BLZ_SIQ_USE_MDR_BR_SYS_RSLV = bit(35);
        const BLZ_M_DSB_RESTART_IF_OLDER_REDIR = bit(36);
        const BLZ_ALWAYS_INCLUSIVE_EFAR_FLUSH = bit(37);
        const BLZ_UNTRUSTED_SNAPSHOT = bit(38);
        const BLZ_SPEC_MDSB_ASYNC_EXIT_STALL_FIX_DISABLE = bit(39);
        const BLZ_DIS_ITLB_PREF_FILL = bit(53);
        const BLZ_DIS_DMD_MERGE_PREF_FILL_FWD = bit(54);
        const BLZ_DISABLE_PWR_OPT = bit(55);
        const BLZ_DISABLE_IC_MISS_PERF_OPT = bit(60);
        const BLZ_DISABLE_ITLB_PREFETCH = bit(61);
        const BLZ_ENABLE_IC_TAG_CFM_PWR_OPT_ON_PAGE_BNDRY = bit(62);
        const BLZ_DISABLE_IC_TAG_CFM_PWR_OPT = bit(63);

        // Older cores, one bit lower than the Blizzard layout
        const TRAP_SMC = bit(8);
        const FORCE_NONSPEC_IF_OLDEST_REDIR_VALID_AND_OLDER = bit(15);
        const FORCE_NONSPEC_IF_SPEC_FLUSH_POINTER_NE_BLK_RTR_POINTER = bit(16);
    }
}

impl Ehid20 {
    pub const BLZ_FORCE_NON_SPEC_TIMER_SEL: BitField = BitField::new(21, 20);
    pub const BLZ_FORCE_NON_SPEC_TARGETED_TIMER_SEL: BitField = BitField::new(23, 22);
    pub const BLZ_MIN_REWIND_STALL: BitField = BitField::new(30, 29);
    pub const BLZ_INC_MISS_Q_WATER_MARK: BitField = BitField::new(59, 56);

    /// Older cores
    pub const FORCE_NONSPEC_TARGETED_TIMER_SEL: BitField = BitField::from_mask(3 << 21);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hid21: u64 {
        const ENABLE_LDREX_FILL_REPLY = bit(19);
        const LDQ_RTR_WAIT_FOR_OLD_ST_REL_COMPLETION = bit(33);
        const DISABLE_CDP_REPLY_PURGED_TRANSACTION = bit(34);
        const AVL_UNK52 = bit(52);
    }
}

/// Field-only register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hid26;

impl Hid26 {
    pub const GROUP1_OFFSET: BitField = BitField::from_mask(0xFF);
    pub const GROUP2_OFFSET: BitField = BitField::from_mask(0xFF << 36);
}

/// Field-only register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hid27;

impl Hid27 {
    pub const GROUP3_OFFSET: BitField = BitField::from_mask(0xFF << 8);
}

const_assert!(disjoint(&[
    Hid13::POST_OFF_CYCLES.mask(),
    Hid13::POST_ON_CYCLES.mask(),
    Hid13::PRE_CYCLES.mask(),
    Hid13::GROUP0_FF1_DELAY.mask(),
    Hid13::GROUP0_FF2_DELAY.mask(),
    Hid13::GROUP0_FF3_DELAY.mask(),
    Hid13::GROUP0_FF4_DELAY.mask(),
    Hid13::GROUP0_FF5_DELAY.mask(),
    Hid13::GROUP0_FF6_DELAY.mask(),
    Hid13::GROUP0_FF7_DELAY.mask(),
    Hid13::RESET_CYCLES.mask(),
]));

const_assert!(disjoint(&[
    Hid1::all().bits(),
    Hid1::ZCL_RF_RESTART_THRESHOLD.mask(),
    Hid1::ZCL_SP_MISPREDICT_THRESHOLD.mask(),
    Hid1::ZCL_SP_RESTART_THRESHOLD.mask(),
    Hid1::ZCL_RF_MISPREDICT_THRESHOLD.mask(),
]));

const_assert!(disjoint(&[
    Ehid1::all().bits(),
    Ehid1::LSP_MODE.mask(),
    Ehid1::LSP_AGE_OUT_INTERVAL.mask(),
    Ehid1::LSP_CNT_INIT_VALUE.mask(),
    Ehid1::LSP_CNT_RETRAIN_VALUE.mask(),
    Ehid1::LSP_CNT_INC_VALUE.mask(),
    Ehid1::LSP_CNT_RPLY_INIT_VALUE.mask(),
    Ehid1::LFSR_SEED.mask(),
]));

const_assert!(disjoint(&[
    Hid4::all().bits(),
    Hid4::CT0_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION.mask(),
    Hid4::CT1_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION.mask(),
    Hid4::CT2_ANTI_LIVELOCK_ON_LOCK_VICTIMIZATION.mask(),
    Hid4::CT0_ANTI_LIVELOCK_ON_OLDEST_LD_ST_REPLAY.mask(),
    Hid4::CT0_ANTI_LIVELOCK_ON_LS_ISS_STALL_ON_LS_REPLAY.mask(),
    Hid4::NON_CNTG_THRESH.mask(),
    Hid4::CNF_CNTR_THRESH.mask(),
    Hid4::ENABLE_LFSR_STALL_STQ_RTR.mask(),
    Hid4::LFSR_SEED.mask(),
]));

const_assert!(disjoint(&[
    Hid26::GROUP1_OFFSET.mask(),
    Hid26::GROUP2_OFFSET.mask(),
]));
