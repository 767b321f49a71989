//! ACC / CYC Power and Clock Override Registers
//!
//! Flag and field names are the documented register names. Most carry no
//! meaning beyond the name, so individual constants go undocumented; the
//! types and the fields bring-up code programs are documented.

// Flag and field constants only, see module docs
#![allow(missing_docs)]

use bitflags::bitflags;

use super::{bit, BitField};

/// ACC_CFG
pub struct AccCfg;

impl AccCfg {
    /// Branch predictor sleep
    pub const BP_SLEEP: BitField = BitField::from_mask(3 << 2);
}

bitflags! {
    /// CYC_OVRD single-bit controls
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CycOvrd: u64 {
        const DISABLE_WFI_RET = bit(0);
    }
}

impl CycOvrd {
    /// FIQ mode
    pub const FIQ_MODE: BitField = BitField::from_mask(3 << 20);
    /// IRQ mode
    pub const IRQ_MODE: BitField = BitField::from_mask(3 << 22);
    /// WFI mode
    pub const WFI_MODE: BitField = BitField::from_mask(3 << 24);
}

bitflags! {
    /// ACC_OVRD single-bit controls
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccOvrd: u64 {
        const FRC_PSM_COND_L3_D_ON = bit(4);
        const DOM_CAN_BE_ON_IN_REF_CLK = bit(9);
        const HALT_LLC_BFR_RUN = bit(10);
        const DIS_TB_PUSH = bit(11);
        const MISR_EN = bit(12);
        const DVFM_SAFE_VOL = bit(19);
        const FRC_ZOUT_AMX_PWR_DN_TMR = bit(20);
        const RC_ACK_INTR_LOCK = bit(21);
        const CONVERT_SIQ_TO_IRQ = bit(22);
        const DISABLE_CLK_DTR = bit(29);
        const DISABLE_PSW_OFF_ABORT = bit(30);
        const RESET_CPM = bit(31);
        const DISABLE_PIO_ON_WFI_CPU = bit(32);
        const DEEP_SLEEP = bit(34);
        const C2_WAKE_UP = bit(35);
        const BYPASS_LLC_FLUSH_IF_EMPTY = bit(36);
        const DISABLE_RETENTION = bit(37);
        const DISABLE_NEXT_POWER_GATE = bit(38);
        const AP_SKEW_N_DELAY_CTL = bit(39);
        const DISABLE_C1_PPT_THROTTLE_0 = bit(40);
        const DISABLE_C1_PPT_THROTTLE_1 = bit(41);
        const REVERT_EMA_SEL_TO_H13 = bit(42);
        const DISABLE_SO_C_GLOBAL_TIME = bit(43);
        const QUIESCE_APSC_BEFORE_ACC_SLEEP = bit(44);
        const IVDM_CLK_ROOT_SEL = bit(45);
        const MA_WITHOUT_SW_POLLING = bit(46);
        const DIVS_UPD_ABRT_LIR = bit(55);
        const CNVT_INC_TO_FULL_UPD = bit(56);
        const DISABLE_DVTMF = bit(57);
        const SKIP_BIU_DI_VS_UPD_ON_FIX_FREQ_RECLOCK = bit(58);
        const PWR_UP_DN_CPU_AFTER_ANE_ACK = bit(59);
    }
}

impl AccOvrd {
    pub const PRE_RESET_CLK_CNTS: BitField = BitField::new(3, 0);
    pub const SSB_DIVS_UPD_REQ: BitField = BitField::new(6, 5);
    pub const SSB_DIVS_SEL: BitField = BitField::new(8, 7);
    pub const PWR_DN_SRM: BitField = BitField::new(14, 13);
    pub const DIS_L2_FLUSH_ACC_SLEEP: BitField = BitField::new(16, 15);
    pub const TRAIN_DOWN_LINK: BitField = BitField::new(18, 17);
    pub const VOL_UPD_ACK: BitField = BitField::new(24, 23);
    pub const POWER_DOWN_CPM: BitField = BitField::new(26, 25);
    pub const CPM_WAKE_UP: BitField = BitField::new(28, 27);
    pub const PMGR_UT_ADCLK_CODE: BitField = BitField::new(50, 47);
    pub const PMGR_UT_DITHER_CODE: BitField = BitField::new(54, 51);
    pub const ANE_CLOCK_STOP_REF_COUNT: BitField = BitField::new(61, 60);
    pub const SPR_OCLA_SEL: BitField = BitField::new(63, 62);

    /// Every multi-bit ACC_OVRD field, low to high
    pub const FIELDS: [BitField; 13] = [
        Self::PRE_RESET_CLK_CNTS,
        Self::SSB_DIVS_UPD_REQ,
        Self::SSB_DIVS_SEL,
        Self::PWR_DN_SRM,
        Self::DIS_L2_FLUSH_ACC_SLEEP,
        Self::TRAIN_DOWN_LINK,
        Self::VOL_UPD_ACK,
        Self::POWER_DOWN_CPM,
        Self::CPM_WAKE_UP,
        Self::PMGR_UT_ADCLK_CODE,
        Self::PMGR_UT_DITHER_CODE,
        Self::ANE_CLOCK_STOP_REF_COUNT,
        Self::SPR_OCLA_SEL,
    ];
}
