//! Register encodings checked against the reverse-engineered register list

use chickens::SysReg;

/// `sys_reg(op0, op1, CRn, CRm, op2)` as listed for each named register
const NAMED: &[(SysReg, (u8, u8, u8, u8, u8))] = &[
    (SysReg::ActlrEl12, (3, 6, 15, 14, 6)), // SYS_IMP_APL_ACTLR_EL12
    (SysReg::AmxCtlEl1, (3, 4, 15, 1, 4)), // SYS_IMP_APL_AMX_CTL_EL1
    (SysReg::AmxCtlEl2, (3, 4, 15, 4, 7)), // SYS_IMP_APL_AMX_CTL_EL2
    (SysReg::AmxCtlEl12, (3, 4, 15, 4, 6)), // SYS_IMP_APL_AMX_CTL_EL12
    (SysReg::CntvctAliasEl0, (3, 4, 15, 10, 6)), // SYS_IMP_APL_CNTVCT_ALIAS_EL0
    (SysReg::Hid0, (3, 0, 15, 0, 0)), // SYS_IMP_APL_HID0
    (SysReg::Ehid0, (3, 0, 15, 0, 1)), // SYS_IMP_APL_EHID0
    (SysReg::Hid1, (3, 0, 15, 1, 0)), // SYS_IMP_APL_HID1
    (SysReg::Ehid1, (3, 0, 15, 1, 1)), // SYS_IMP_APL_EHID1
    (SysReg::Hid3, (3, 0, 15, 3, 0)), // SYS_IMP_APL_HID3
    (SysReg::Hid4, (3, 0, 15, 4, 0)), // SYS_IMP_APL_HID4
    (SysReg::Ehid4, (3, 0, 15, 4, 1)), // SYS_IMP_APL_EHID4
    (SysReg::Hid5, (3, 0, 15, 5, 0)), // SYS_IMP_APL_HID5
    (SysReg::Hid6, (3, 0, 15, 6, 0)), // SYS_IMP_APL_HID6
    (SysReg::Hid7, (3, 0, 15, 7, 0)), // SYS_IMP_APL_HID7
    (SysReg::Hid9, (3, 0, 15, 9, 0)), // SYS_IMP_APL_HID9
    (SysReg::Ehid9, (3, 0, 15, 9, 1)), // SYS_IMP_APL_EHID9
    (SysReg::Hid10, (3, 0, 15, 10, 0)), // SYS_IMP_APL_HID10
    (SysReg::Ehid10, (3, 0, 15, 10, 1)), // SYS_IMP_APL_EHID10
    (SysReg::Hid11, (3, 0, 15, 11, 0)), // SYS_IMP_APL_HID11
    (SysReg::Hid12, (3, 0, 15, 12, 0)), // SYS_IMP_APL_HID12
    (SysReg::Hid13, (3, 0, 15, 14, 0)), // SYS_IMP_APL_HID13
    (SysReg::Hid14, (3, 0, 15, 15, 0)), // SYS_IMP_APL_HID14
    (SysReg::Hid16, (3, 0, 15, 15, 2)), // SYS_IMP_APL_HID16
    (SysReg::Hid18, (3, 0, 15, 11, 2)), // SYS_IMP_APL_HID18
    (SysReg::Ehid18, (3, 0, 15, 11, 3)), // SYS_IMP_APL_EHID18
    (SysReg::Ehid20, (3, 0, 15, 1, 2)), // SYS_IMP_APL_EHID20
    (SysReg::Hid21, (3, 0, 15, 1, 3)), // SYS_IMP_APL_HID21
    (SysReg::Hid26, (3, 0, 15, 0, 3)), // SYS_IMP_APL_HID26
    (SysReg::Hid27, (3, 0, 15, 0, 4)), // SYS_IMP_APL_HID27
    (SysReg::Pmcr0, (3, 1, 15, 0, 0)), // SYS_IMP_APL_PMCR0
    (SysReg::Pmcr1, (3, 1, 15, 1, 0)), // SYS_IMP_APL_PMCR1
    (SysReg::Pmcr2, (3, 1, 15, 2, 0)), // SYS_IMP_APL_PMCR2
    (SysReg::Pmcr3, (3, 1, 15, 3, 0)), // SYS_IMP_APL_PMCR3
    (SysReg::Pmcr4, (3, 1, 15, 4, 0)), // SYS_IMP_APL_PMCR4
    (SysReg::Pmesr0, (3, 1, 15, 5, 0)), // SYS_IMP_APL_PMESR0
    (SysReg::Pmesr1, (3, 1, 15, 6, 0)), // SYS_IMP_APL_PMESR1
    (SysReg::Pmsr, (3, 1, 15, 13, 0)), // SYS_IMP_APL_PMSR
    (SysReg::Pmc0, (3, 2, 15, 0, 0)), // SYS_IMP_APL_PMC0
    (SysReg::Pmc1, (3, 2, 15, 1, 0)), // SYS_IMP_APL_PMC1
    (SysReg::Pmc2, (3, 2, 15, 2, 0)), // SYS_IMP_APL_PMC2
    (SysReg::Pmc3, (3, 2, 15, 3, 0)), // SYS_IMP_APL_PMC3
    (SysReg::Pmc4, (3, 2, 15, 4, 0)), // SYS_IMP_APL_PMC4
    (SysReg::Pmc5, (3, 2, 15, 5, 0)), // SYS_IMP_APL_PMC5
    (SysReg::Pmc6, (3, 2, 15, 6, 0)), // SYS_IMP_APL_PMC6
    (SysReg::Pmc7, (3, 2, 15, 7, 0)), // SYS_IMP_APL_PMC7
    (SysReg::Pmc8, (3, 2, 15, 9, 0)), // SYS_IMP_APL_PMC8
    (SysReg::Pmc9, (3, 2, 15, 10, 0)), // SYS_IMP_APL_PMC9
    (SysReg::LsuErrSts, (3, 3, 15, 0, 0)), // SYS_IMP_APL_LSU_ERR_STS
    (SysReg::ELsuErrSts, (3, 3, 15, 2, 0)), // SYS_IMP_APL_E_LSU_ERR_STS
    (SysReg::L2cErrSts, (3, 3, 15, 8, 0)), // SYS_IMP_APL_L2C_ERR_STS
    (SysReg::L2cErrAdr, (3, 3, 15, 9, 0)), // SYS_IMP_APL_L2C_ERR_ADR
    (SysReg::L2cErrInf, (3, 3, 15, 10, 0)), // SYS_IMP_APL_L2C_ERR_INF
    (SysReg::FedErrSts, (3, 4, 15, 0, 0)), // SYS_IMP_APL_FED_ERR_STS
    (SysReg::EFedErrSts, (3, 4, 15, 0, 2)), // SYS_IMP_APL_E_FED_ERR_STS
    (SysReg::SiqCfgEl1, (3, 4, 15, 10, 4)), // SYS_IMP_APL_SIQ_CFG_EL1
    (SysReg::MmuErrSts, (3, 6, 15, 0, 0)), // SYS_IMP_APL_MMU_ERR_STS
    (SysReg::EMmuErrSts, (3, 6, 15, 2, 0)), // SYS_IMP_APL_E_MMU_ERR_STS
    (SysReg::AccCfg, (3, 5, 15, 4, 0)), // SYS_IMP_APL_ACC_CFG
    (SysReg::CycOvrd, (3, 5, 15, 5, 0)), // SYS_IMP_APL_CYC_OVRD
    (SysReg::AccOvrd, (3, 5, 15, 6, 0)), // SYS_IMP_APL_ACC_OVRD
    (SysReg::Upmcr0, (3, 7, 15, 0, 4)), // SYS_IMP_APL_UPMCR0
    (SysReg::Upmsr, (3, 7, 15, 6, 4)), // SYS_IMP_APL_UPMSR
    (SysReg::SprrConfigEl1, (3, 6, 15, 1, 0)), // SYS_IMP_APL_SPRR_CONFIG_EL1
    (SysReg::GxfConfigEl1, (3, 6, 15, 1, 2)), // SYS_IMP_APL_GXF_CONFIG_EL1
    (SysReg::GxfStatusEl1, (3, 6, 15, 8, 0)), // SYS_IMP_APL_GXF_STATUS_EL1
    (SysReg::GxfAbortEl1, (3, 6, 15, 8, 2)), // SYS_IMP_APL_GXF_ABORT_EL1
    (SysReg::GxfEnterEl1, (3, 6, 15, 8, 1)), // SYS_IMP_APL_GXF_ENTER_EL1
    (SysReg::GxfAbortEl12, (3, 6, 15, 15, 3)), // SYS_IMP_APL_GXF_ABORT_EL12
    (SysReg::GxfEnterEl12, (3, 6, 15, 15, 2)), // SYS_IMP_APL_GXF_ENTER_EL12
    (SysReg::SprrPermEl0, (3, 6, 15, 1, 5)), // SYS_IMP_APL_SPRR_PERM_EL0
    (SysReg::SprrPermEl1, (3, 6, 15, 1, 6)), // SYS_IMP_APL_SPRR_PERM_EL1
    (SysReg::SprrPermEl02, (3, 4, 15, 5, 2)), // SYS_IMP_APL_SPRR_PERM_EL02
    (SysReg::SprrPermEl12, (3, 6, 15, 15, 7)), // SYS_IMP_APL_SPRR_PERM_EL12
    (SysReg::TpidrGl1, (3, 6, 15, 10, 1)), // SYS_IMP_APL_TPIDR_GL1
    (SysReg::VbarGl1, (3, 6, 15, 10, 2)), // SYS_IMP_APL_VBAR_GL1
    (SysReg::SpsrGl1, (3, 6, 15, 10, 3)), // SYS_IMP_APL_SPSR_GL1
    (SysReg::AspsrGl1, (3, 6, 15, 10, 4)), // SYS_IMP_APL_ASPSR_GL1
    (SysReg::EsrGl1, (3, 6, 15, 10, 5)), // SYS_IMP_APL_ESR_GL1
    (SysReg::ElrGl1, (3, 6, 15, 10, 6)), // SYS_IMP_APL_ELR_GL1
    (SysReg::FarGl1, (3, 6, 15, 10, 7)), // SYS_IMP_APL_FAR_GL1
    (SysReg::VbarGl12, (3, 6, 15, 9, 2)), // SYS_IMP_APL_VBAR_GL12
    (SysReg::SpsrGl12, (3, 6, 15, 9, 3)), // SYS_IMP_APL_SPSR_GL12
    (SysReg::AspsrGl12, (3, 6, 15, 9, 4)), // SYS_IMP_APL_ASPSR_GL12
    (SysReg::EsrGl12, (3, 6, 15, 9, 5)), // SYS_IMP_APL_ESR_GL12
    (SysReg::ElrGl12, (3, 6, 15, 9, 6)), // SYS_IMP_APL_ELR_GL12
    (SysReg::SpGl12, (3, 6, 15, 10, 0)), // SYS_IMP_APL_SP_GL12
    (SysReg::Afsr1Gl1, (3, 6, 15, 0, 1)), // SYS_IMP_APL_AFSR1_GL1
    (SysReg::ApvmkeyloEl2, (3, 6, 15, 14, 4)), // SYS_IMP_APL_APVMKEYLO_EL2
    (SysReg::ApvmkeyhiEl2, (3, 6, 15, 14, 5)), // SYS_IMP_APL_APVMKEYHI_EL2
    (SysReg::ApstsEl12, (3, 6, 15, 14, 7)), // SYS_IMP_APL_APSTS_EL12
    (SysReg::ApctlEl1, (3, 4, 15, 0, 4)), // SYS_IMP_APL_APCTL_EL1
    (SysReg::ApctlEl2, (3, 6, 15, 12, 2)), // SYS_IMP_APL_APCTL_EL2
    (SysReg::ApctlEl12, (3, 6, 15, 15, 0)), // SYS_IMP_APL_APCTL_EL12
    (SysReg::VmTmrFiqEnaEl2, (3, 5, 15, 1, 3)), // SYS_IMP_APL_VM_TMR_FIQ_ENA_EL2
    (SysReg::IpiRrLocalEl1, (3, 5, 15, 0, 0)), // SYS_IMP_APL_IPI_RR_LOCAL_EL1
    (SysReg::IpiRrGlobalEl1, (3, 5, 15, 0, 1)), // SYS_IMP_APL_IPI_RR_GLOBAL_EL1
    (SysReg::IpiSrEl1, (3, 5, 15, 1, 1)), // SYS_IMP_APL_IPI_SR_EL1
    (SysReg::IpiCrEl1, (3, 5, 15, 3, 1)), // SYS_IMP_APL_IPI_CR_EL1
];

#[test]
fn named_registers_match_listed_encodings() {
    for &(reg, expected) in NAMED {
        assert_eq!(reg.encoding().tuple(), expected, "{reg:?}");
    }
}

#[test]
fn unnamed_everest_register_encoding() {
    assert_eq!(SysReg::S3_0_C15_C2_4.encoding().tuple(), (3, 0, 15, 2, 4));
}

#[test]
fn every_register_is_listed() {
    for reg in SysReg::ALL {
        let listed = NAMED.iter().any(|&(named, _)| named == *reg);
        assert!(listed || *reg == SysReg::S3_0_C15_C2_4, "{reg:?} has no listed encoding");
    }
    assert_eq!(NAMED.len() + 1, SysReg::ALL.len());
}

#[test]
fn names_spell_the_encoding() {
    for &(reg, (op0, op1, crn, crm, op2)) in NAMED {
        let mut expected = heapless::String::<24>::new();
        core::fmt::write(&mut expected, format_args!("s{op0}_{op1}_c{crn}_c{crm}_{op2}")).unwrap();
        assert_eq!(reg.name(), expected.as_str());
    }
}
