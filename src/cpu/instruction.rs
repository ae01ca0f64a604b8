// src/cpu/instruction.rs
//
// The 256-entry opcode dispatch table, built with `lazy_static!`. Where
// the 8080 duplicates an opcode (the undocumented `NOP`s at
// 0x08/0x10/... and the duplicate `JMP`/`RET`/`CALL` encodings), the
// same handler is wired in twice rather than routed through
// `handle_invalid_opcode` — these duplicates are documented 8080
// behaviour, not undocumented opcodes.

use super::{Cpu, CpuResult};
use crate::bus::Bus;
use lazy_static::lazy_static;

#[derive(Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub execute: fn(&mut Cpu, &mut Bus) -> CpuResult<u16>,
}

impl Instruction {
    pub const fn new(
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        execute: fn(&mut Cpu, &mut Bus) -> CpuResult<u16>,
    ) -> Self {
        Instruction {
            mnemonic,
            length,
            cycles,
            execute,
        }
    }

    pub const fn invalid() -> Self {
        Instruction {
            mnemonic: "???",
            length: 1,
            cycles: 4,
            execute: Cpu::handle_invalid_opcode,
        }
    }
}

macro_rules! instr {
    ($mne:expr, $len:expr, $cyc:expr, $exec:expr) => {
        Instruction::new($mne, $len, $cyc, $exec)
    };
}

lazy_static! {
    pub static ref TABLE: [Instruction; 256] = [
        // --- 0x00 ---
        instr!("NOP", 1, 4, Cpu::op_nop),
        instr!("LXI B,d16", 3, 10, Cpu::op_lxi_b),
        instr!("STAX B", 1, 7, Cpu::op_stax_b),
        instr!("INX B", 1, 5, Cpu::op_inx_b),
        instr!("INR B", 1, 5, Cpu::op_inr_b),
        instr!("DCR B", 1, 5, Cpu::op_dcr_b),
        instr!("MVI B,d8", 2, 7, Cpu::op_mvi_b),
        instr!("RLC", 1, 4, Cpu::op_rlc),
        instr!("NOP", 1, 4, Cpu::op_nop), // 08, undocumented dup
        instr!("DAD B", 1, 10, Cpu::op_dad_b),
        instr!("LDAX B", 1, 7, Cpu::op_ldax_b),
        instr!("DCX B", 1, 5, Cpu::op_dcx_b),
        instr!("INR C", 1, 5, Cpu::op_inr_c),
        instr!("DCR C", 1, 5, Cpu::op_dcr_c),
        instr!("MVI C,d8", 2, 7, Cpu::op_mvi_c),
        instr!("RRC", 1, 4, Cpu::op_rrc),
        // --- 0x10 ---
        instr!("NOP", 1, 4, Cpu::op_nop), // 10, undocumented dup
        instr!("LXI D,d16", 3, 10, Cpu::op_lxi_d),
        instr!("STAX D", 1, 7, Cpu::op_stax_d),
        instr!("INX D", 1, 5, Cpu::op_inx_d),
        instr!("INR D", 1, 5, Cpu::op_inr_d),
        instr!("DCR D", 1, 5, Cpu::op_dcr_d),
        instr!("MVI D,d8", 2, 7, Cpu::op_mvi_d),
        instr!("RAL", 1, 4, Cpu::op_ral),
        instr!("NOP", 1, 4, Cpu::op_nop), // 18, undocumented dup
        instr!("DAD D", 1, 10, Cpu::op_dad_d),
        instr!("LDAX D", 1, 7, Cpu::op_ldax_d),
        instr!("DCX D", 1, 5, Cpu::op_dcx_d),
        instr!("INR E", 1, 5, Cpu::op_inr_e),
        instr!("DCR E", 1, 5, Cpu::op_dcr_e),
        instr!("MVI E,d8", 2, 7, Cpu::op_mvi_e),
        instr!("RAR", 1, 4, Cpu::op_rar),
        // --- 0x20 ---
        instr!("NOP", 1, 4, Cpu::op_nop), // 20, undocumented dup
        instr!("LXI H,d16", 3, 10, Cpu::op_lxi_h),
        instr!("SHLD a16", 3, 16, Cpu::op_shld),
        instr!("INX H", 1, 5, Cpu::op_inx_h),
        instr!("INR H", 1, 5, Cpu::op_inr_h),
        instr!("DCR H", 1, 5, Cpu::op_dcr_h),
        instr!("MVI H,d8", 2, 7, Cpu::op_mvi_h),
        instr!("DAA", 1, 4, Cpu::op_daa),
        instr!("NOP", 1, 4, Cpu::op_nop), // 28, undocumented dup
        instr!("DAD H", 1, 10, Cpu::op_dad_h),
        instr!("LHLD a16", 3, 16, Cpu::op_lhld),
        instr!("DCX H", 1, 5, Cpu::op_dcx_h),
        instr!("INR L", 1, 5, Cpu::op_inr_l),
        instr!("DCR L", 1, 5, Cpu::op_dcr_l),
        instr!("MVI L,d8", 2, 7, Cpu::op_mvi_l),
        instr!("CMA", 1, 4, Cpu::op_cma),
        // --- 0x30 ---
        instr!("NOP", 1, 4, Cpu::op_nop), // 30, undocumented dup
        instr!("LXI SP,d16", 3, 10, Cpu::op_lxi_sp),
        instr!("STA a16", 3, 13, Cpu::op_sta),
        instr!("INX SP", 1, 5, Cpu::op_inx_sp),
        instr!("INR M", 1, 10, Cpu::op_inr_m),
        instr!("DCR M", 1, 10, Cpu::op_dcr_m),
        instr!("MVI M,d8", 2, 10, Cpu::op_mvi_m),
        instr!("STC", 1, 4, Cpu::op_stc),
        instr!("NOP", 1, 4, Cpu::op_nop), // 38, undocumented dup
        instr!("DAD SP", 1, 10, Cpu::op_dad_sp),
        instr!("LDA a16", 3, 13, Cpu::op_lda),
        instr!("DCX SP", 1, 5, Cpu::op_dcx_sp),
        instr!("INR A", 1, 5, Cpu::op_inr_a),
        instr!("DCR A", 1, 5, Cpu::op_dcr_a),
        instr!("MVI A,d8", 2, 7, Cpu::op_mvi_a),
        instr!("CMC", 1, 4, Cpu::op_cmc),
        // --- 0x40: MOV B,r ---
        instr!("MOV B,B", 1, 5, Cpu::op_mov_b_b),
        instr!("MOV B,C", 1, 5, Cpu::op_mov_b_c),
        instr!("MOV B,D", 1, 5, Cpu::op_mov_b_d),
        instr!("MOV B,E", 1, 5, Cpu::op_mov_b_e),
        instr!("MOV B,H", 1, 5, Cpu::op_mov_b_h),
        instr!("MOV B,L", 1, 5, Cpu::op_mov_b_l),
        instr!("MOV B,M", 1, 7, Cpu::op_mov_b_m),
        instr!("MOV B,A", 1, 5, Cpu::op_mov_b_a),
        // --- 0x48: MOV C,r ---
        instr!("MOV C,B", 1, 5, Cpu::op_mov_c_b),
        instr!("MOV C,C", 1, 5, Cpu::op_mov_c_c),
        instr!("MOV C,D", 1, 5, Cpu::op_mov_c_d),
        instr!("MOV C,E", 1, 5, Cpu::op_mov_c_e),
        instr!("MOV C,H", 1, 5, Cpu::op_mov_c_h),
        instr!("MOV C,L", 1, 5, Cpu::op_mov_c_l),
        instr!("MOV C,M", 1, 7, Cpu::op_mov_c_m),
        instr!("MOV C,A", 1, 5, Cpu::op_mov_c_a),
        // --- 0x50: MOV D,r ---
        instr!("MOV D,B", 1, 5, Cpu::op_mov_d_b),
        instr!("MOV D,C", 1, 5, Cpu::op_mov_d_c),
        instr!("MOV D,D", 1, 5, Cpu::op_mov_d_d),
        instr!("MOV D,E", 1, 5, Cpu::op_mov_d_e),
        instr!("MOV D,H", 1, 5, Cpu::op_mov_d_h),
        instr!("MOV D,L", 1, 5, Cpu::op_mov_d_l),
        instr!("MOV D,M", 1, 7, Cpu::op_mov_d_m),
        instr!("MOV D,A", 1, 5, Cpu::op_mov_d_a),
        // --- 0x58: MOV E,r ---
        instr!("MOV E,B", 1, 5, Cpu::op_mov_e_b),
        instr!("MOV E,C", 1, 5, Cpu::op_mov_e_c),
        instr!("MOV E,D", 1, 5, Cpu::op_mov_e_d),
        instr!("MOV E,E", 1, 5, Cpu::op_mov_e_e),
        instr!("MOV E,H", 1, 5, Cpu::op_mov_e_h),
        instr!("MOV E,L", 1, 5, Cpu::op_mov_e_l),
        instr!("MOV E,M", 1, 7, Cpu::op_mov_e_m),
        instr!("MOV E,A", 1, 5, Cpu::op_mov_e_a),
        // --- 0x60: MOV H,r ---
        instr!("MOV H,B", 1, 5, Cpu::op_mov_h_b),
        instr!("MOV H,C", 1, 5, Cpu::op_mov_h_c),
        instr!("MOV H,D", 1, 5, Cpu::op_mov_h_d),
        instr!("MOV H,E", 1, 5, Cpu::op_mov_h_e),
        instr!("MOV H,H", 1, 5, Cpu::op_mov_h_h),
        instr!("MOV H,L", 1, 5, Cpu::op_mov_h_l),
        instr!("MOV H,M", 1, 7, Cpu::op_mov_h_m),
        instr!("MOV H,A", 1, 5, Cpu::op_mov_h_a),
        // --- 0x68: MOV L,r ---
        instr!("MOV L,B", 1, 5, Cpu::op_mov_l_b),
        instr!("MOV L,C", 1, 5, Cpu::op_mov_l_c),
        instr!("MOV L,D", 1, 5, Cpu::op_mov_l_d),
        instr!("MOV L,E", 1, 5, Cpu::op_mov_l_e),
        instr!("MOV L,H", 1, 5, Cpu::op_mov_l_h),
        instr!("MOV L,L", 1, 5, Cpu::op_mov_l_l),
        instr!("MOV L,M", 1, 7, Cpu::op_mov_l_m),
        instr!("MOV L,A", 1, 5, Cpu::op_mov_l_a),
        // --- 0x70: MOV M,r / HLT ---
        instr!("MOV M,B", 1, 7, Cpu::op_mov_m_b),
        instr!("MOV M,C", 1, 7, Cpu::op_mov_m_c),
        instr!("MOV M,D", 1, 7, Cpu::op_mov_m_d),
        instr!("MOV M,E", 1, 7, Cpu::op_mov_m_e),
        instr!("MOV M,H", 1, 7, Cpu::op_mov_m_h),
        instr!("MOV M,L", 1, 7, Cpu::op_mov_m_l),
        instr!("HLT", 1, 7, Cpu::op_hlt),
        instr!("MOV M,A", 1, 7, Cpu::op_mov_m_a),
        // --- 0x78: MOV A,r ---
        instr!("MOV A,B", 1, 5, Cpu::op_mov_a_b),
        instr!("MOV A,C", 1, 5, Cpu::op_mov_a_c),
        instr!("MOV A,D", 1, 5, Cpu::op_mov_a_d),
        instr!("MOV A,E", 1, 5, Cpu::op_mov_a_e),
        instr!("MOV A,H", 1, 5, Cpu::op_mov_a_h),
        instr!("MOV A,L", 1, 5, Cpu::op_mov_a_l),
        instr!("MOV A,M", 1, 7, Cpu::op_mov_a_m),
        instr!("MOV A,A", 1, 5, Cpu::op_mov_a_a),
        // --- 0x80: ADD r ---
        instr!("ADD B", 1, 4, Cpu::op_add_a_b),
        instr!("ADD C", 1, 4, Cpu::op_add_a_c),
        instr!("ADD D", 1, 4, Cpu::op_add_a_d),
        instr!("ADD E", 1, 4, Cpu::op_add_a_e),
        instr!("ADD H", 1, 4, Cpu::op_add_a_h),
        instr!("ADD L", 1, 4, Cpu::op_add_a_l),
        instr!("ADD M", 1, 7, Cpu::op_add_a_m),
        instr!("ADD A", 1, 4, Cpu::op_add_a_a),
        // --- 0x88: ADC r ---
        instr!("ADC B", 1, 4, Cpu::op_adc_a_b),
        instr!("ADC C", 1, 4, Cpu::op_adc_a_c),
        instr!("ADC D", 1, 4, Cpu::op_adc_a_d),
        instr!("ADC E", 1, 4, Cpu::op_adc_a_e),
        instr!("ADC H", 1, 4, Cpu::op_adc_a_h),
        instr!("ADC L", 1, 4, Cpu::op_adc_a_l),
        instr!("ADC M", 1, 7, Cpu::op_adc_a_m),
        instr!("ADC A", 1, 4, Cpu::op_adc_a_a),
        // --- 0x90: SUB r ---
        instr!("SUB B", 1, 4, Cpu::op_sub_b),
        instr!("SUB C", 1, 4, Cpu::op_sub_c),
        instr!("SUB D", 1, 4, Cpu::op_sub_d),
        instr!("SUB E", 1, 4, Cpu::op_sub_e),
        instr!("SUB H", 1, 4, Cpu::op_sub_h),
        instr!("SUB L", 1, 4, Cpu::op_sub_l),
        instr!("SUB M", 1, 7, Cpu::op_sub_m),
        instr!("SUB A", 1, 4, Cpu::op_sub_a),
        // --- 0x98: SBB r ---
        instr!("SBB B", 1, 4, Cpu::op_sbb_b),
        instr!("SBB C", 1, 4, Cpu::op_sbb_c),
        instr!("SBB D", 1, 4, Cpu::op_sbb_d),
        instr!("SBB E", 1, 4, Cpu::op_sbb_e),
        instr!("SBB H", 1, 4, Cpu::op_sbb_h),
        instr!("SBB L", 1, 4, Cpu::op_sbb_l),
        instr!("SBB M", 1, 7, Cpu::op_sbb_m),
        instr!("SBB A", 1, 4, Cpu::op_sbb_a),
        // --- 0xA0: ANA r ---
        instr!("ANA B", 1, 4, Cpu::op_ana_b),
        instr!("ANA C", 1, 4, Cpu::op_ana_c),
        instr!("ANA D", 1, 4, Cpu::op_ana_d),
        instr!("ANA E", 1, 4, Cpu::op_ana_e),
        instr!("ANA H", 1, 4, Cpu::op_ana_h),
        instr!("ANA L", 1, 4, Cpu::op_ana_l),
        instr!("ANA M", 1, 7, Cpu::op_ana_m),
        instr!("ANA A", 1, 4, Cpu::op_ana_a),
        // --- 0xA8: XRA r ---
        instr!("XRA B", 1, 4, Cpu::op_xra_b),
        instr!("XRA C", 1, 4, Cpu::op_xra_c),
        instr!("XRA D", 1, 4, Cpu::op_xra_d),
        instr!("XRA E", 1, 4, Cpu::op_xra_e),
        instr!("XRA H", 1, 4, Cpu::op_xra_h),
        instr!("XRA L", 1, 4, Cpu::op_xra_l),
        instr!("XRA M", 1, 7, Cpu::op_xra_m),
        instr!("XRA A", 1, 4, Cpu::op_xra_a),
        // --- 0xB0: ORA r ---
        instr!("ORA B", 1, 4, Cpu::op_ora_b),
        instr!("ORA C", 1, 4, Cpu::op_ora_c),
        instr!("ORA D", 1, 4, Cpu::op_ora_d),
        instr!("ORA E", 1, 4, Cpu::op_ora_e),
        instr!("ORA H", 1, 4, Cpu::op_ora_h),
        instr!("ORA L", 1, 4, Cpu::op_ora_l),
        instr!("ORA M", 1, 7, Cpu::op_ora_m),
        instr!("ORA A", 1, 4, Cpu::op_ora_a),
        // --- 0xB8: CMP r ---
        instr!("CMP B", 1, 4, Cpu::op_cmp_b),
        instr!("CMP C", 1, 4, Cpu::op_cmp_c),
        instr!("CMP D", 1, 4, Cpu::op_cmp_d),
        instr!("CMP E", 1, 4, Cpu::op_cmp_e),
        instr!("CMP H", 1, 4, Cpu::op_cmp_h),
        instr!("CMP L", 1, 4, Cpu::op_cmp_l),
        instr!("CMP M", 1, 7, Cpu::op_cmp_m),
        instr!("CMP A", 1, 4, Cpu::op_cmp_a),
        // --- 0xC0 ---
        instr!("RNZ", 1, 5, Cpu::op_rnz),
        instr!("POP B", 1, 10, Cpu::op_pop_b),
        instr!("JNZ a16", 3, 10, Cpu::op_jnz),
        instr!("JMP a16", 3, 10, Cpu::op_jmp),
        instr!("CNZ a16", 3, 11, Cpu::op_cnz),
        instr!("PUSH B", 1, 11, Cpu::op_push_b),
        instr!("ADI d8", 2, 7, Cpu::op_adi),
        instr!("RST 0", 1, 11, Cpu::op_rst_0),
        instr!("RZ", 1, 5, Cpu::op_rz),
        instr!("RET", 1, 10, Cpu::op_ret),
        instr!("JZ a16", 3, 10, Cpu::op_jz),
        instr!("JMP a16", 3, 10, Cpu::op_jmp), // 0xCB, undocumented dup
        instr!("CZ a16", 3, 11, Cpu::op_cz),
        instr!("CALL a16", 3, 17, Cpu::op_call),
        instr!("ACI d8", 2, 7, Cpu::op_aci),
        instr!("RST 1", 1, 11, Cpu::op_rst_1),
        // --- 0xD0 ---
        instr!("RNC", 1, 5, Cpu::op_rnc),
        instr!("POP D", 1, 10, Cpu::op_pop_d),
        instr!("JNC a16", 3, 10, Cpu::op_jnc),
        instr!("OUT d8", 2, 10, Cpu::op_out),
        instr!("CNC a16", 3, 11, Cpu::op_cnc),
        instr!("PUSH D", 1, 11, Cpu::op_push_d),
        instr!("SUI d8", 2, 7, Cpu::op_sui),
        instr!("RST 2", 1, 11, Cpu::op_rst_2),
        instr!("RC", 1, 5, Cpu::op_rc),
        instr!("RET", 1, 10, Cpu::op_ret), // 0xD9, undocumented dup
        instr!("JC a16", 3, 10, Cpu::op_jc),
        instr!("IN d8", 2, 10, Cpu::op_in),
        instr!("CC a16", 3, 11, Cpu::op_cc),
        instr!("CALL a16", 3, 17, Cpu::op_call), // 0xDD, undocumented dup
        instr!("SBI d8", 2, 7, Cpu::op_sbi),
        instr!("RST 3", 1, 11, Cpu::op_rst_3),
        // --- 0xE0 ---
        instr!("RPO", 1, 5, Cpu::op_rpo),
        instr!("POP H", 1, 10, Cpu::op_pop_h),
        instr!("JPO a16", 3, 10, Cpu::op_jpo),
        instr!("XTHL", 1, 18, Cpu::op_xthl),
        instr!("CPO a16", 3, 11, Cpu::op_cpo),
        instr!("PUSH H", 1, 11, Cpu::op_push_h),
        instr!("ANI d8", 2, 7, Cpu::op_ani),
        instr!("RST 4", 1, 11, Cpu::op_rst_4),
        instr!("RPE", 1, 5, Cpu::op_rpe),
        instr!("PCHL", 1, 5, Cpu::op_pchl),
        instr!("JPE a16", 3, 10, Cpu::op_jpe),
        instr!("XCHG", 1, 5, Cpu::op_xchg),
        instr!("CPE a16", 3, 11, Cpu::op_cpe),
        instr!("CALL a16", 3, 17, Cpu::op_call), // 0xED, undocumented dup
        instr!("XRI d8", 2, 7, Cpu::op_xri),
        instr!("RST 5", 1, 11, Cpu::op_rst_5),
        // --- 0xF0 ---
        instr!("RP", 1, 5, Cpu::op_rp),
        instr!("POP PSW", 1, 10, Cpu::op_pop_psw),
        instr!("JP a16", 3, 10, Cpu::op_jp),
        instr!("DI", 1, 4, Cpu::op_di),
        instr!("CP a16", 3, 11, Cpu::op_cp),
        instr!("PUSH PSW", 1, 11, Cpu::op_push_psw),
        instr!("ORI d8", 2, 7, Cpu::op_ori),
        instr!("RST 6", 1, 11, Cpu::op_rst_6),
        instr!("RM", 1, 5, Cpu::op_rm),
        instr!("SPHL", 1, 5, Cpu::op_sphl),
        instr!("JM a16", 3, 10, Cpu::op_jm),
        instr!("EI", 1, 4, Cpu::op_ei),
        instr!("CM a16", 3, 11, Cpu::op_cm),
        instr!("CALL a16", 3, 17, Cpu::op_call), // 0xFD, undocumented dup
        instr!("CPI d8", 2, 7, Cpu::op_cpi),
        instr!("RST 7", 1, 11, Cpu::op_rst_7),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_256_entries_and_no_blank_mnemonics() {
        assert_eq!(TABLE.len(), 256);
        for instruction in TABLE.iter() {
            assert!(!instruction.mnemonic.is_empty());
        }
    }

    #[test]
    fn conditional_ret_base_cost_is_the_not_taken_figure() {
        // RNZ: 5 base + 6 extra when taken = 11.
        assert_eq!(TABLE[0xC0].cycles, 5);
    }

    #[test]
    fn undocumented_duplicate_opcodes_still_dispatch() {
        assert_eq!(TABLE[0x08].mnemonic, "NOP");
        assert_eq!(TABLE[0xCB].mnemonic, "JMP a16");
        assert_eq!(TABLE[0xD9].mnemonic, "RET");
    }
}
