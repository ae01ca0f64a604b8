// src/cpu/ops_alu.rs
//
// Per-opcode ALU wrappers generated from the flag-setting helpers in
// cpu.rs (add_a/sub_a/and_a/xor_a/or_a/cp_a/inr/dcr/dad).

use super::{Cpu, CpuResult};
use crate::bus::Bus;

impl Cpu {
    // ADD A, r / (HL) / d8
    alu_a_r!(op_add_a_b, add_a, b);
    alu_a_r!(op_add_a_c, add_a, c);
    alu_a_r!(op_add_a_d, add_a, d);
    alu_a_r!(op_add_a_e, add_a, e);
    alu_a_r!(op_add_a_h, add_a, h);
    alu_a_r!(op_add_a_l, add_a, l);
    alu_a_m!(op_add_a_m, add_a);
    alu_a_r!(op_add_a_a, add_a, a);
    alu_a_imm!(op_adi, add_a);

    // ADC A, r / (HL) / d8
    alu_a_r!(op_adc_a_b, add_a, b, carry);
    alu_a_r!(op_adc_a_c, add_a, c, carry);
    alu_a_r!(op_adc_a_d, add_a, d, carry);
    alu_a_r!(op_adc_a_e, add_a, e, carry);
    alu_a_r!(op_adc_a_h, add_a, h, carry);
    alu_a_r!(op_adc_a_l, add_a, l, carry);
    alu_a_m!(op_adc_a_m, add_a, carry);
    alu_a_r!(op_adc_a_a, add_a, a, carry);
    alu_a_imm!(op_aci, add_a, carry);

    // SUB r / (HL) / d8
    alu_a_r!(op_sub_b, sub_a, b);
    alu_a_r!(op_sub_c, sub_a, c);
    alu_a_r!(op_sub_d, sub_a, d);
    alu_a_r!(op_sub_e, sub_a, e);
    alu_a_r!(op_sub_h, sub_a, h);
    alu_a_r!(op_sub_l, sub_a, l);
    alu_a_m!(op_sub_m, sub_a);
    alu_a_r!(op_sub_a, sub_a, a);
    alu_a_imm!(op_sui, sub_a);

    // SBB r / (HL) / d8
    alu_a_r!(op_sbb_b, sub_a, b, carry);
    alu_a_r!(op_sbb_c, sub_a, c, carry);
    alu_a_r!(op_sbb_d, sub_a, d, carry);
    alu_a_r!(op_sbb_e, sub_a, e, carry);
    alu_a_r!(op_sbb_h, sub_a, h, carry);
    alu_a_r!(op_sbb_l, sub_a, l, carry);
    alu_a_m!(op_sbb_m, sub_a, carry);
    alu_a_r!(op_sbb_a, sub_a, a, carry);
    alu_a_imm!(op_sbi, sub_a, carry);

    // ANA r / (HL) / d8
    alu_a_r!(op_ana_b, and_a, b);
    alu_a_r!(op_ana_c, and_a, c);
    alu_a_r!(op_ana_d, and_a, d);
    alu_a_r!(op_ana_e, and_a, e);
    alu_a_r!(op_ana_h, and_a, h);
    alu_a_r!(op_ana_l, and_a, l);
    alu_a_m!(op_ana_m, and_a);
    alu_a_r!(op_ana_a, and_a, a);
    alu_a_imm!(op_ani, and_a);

    // XRA r / (HL) / d8
    alu_a_r!(op_xra_b, xor_a, b);
    alu_a_r!(op_xra_c, xor_a, c);
    alu_a_r!(op_xra_d, xor_a, d);
    alu_a_r!(op_xra_e, xor_a, e);
    alu_a_r!(op_xra_h, xor_a, h);
    alu_a_r!(op_xra_l, xor_a, l);
    alu_a_m!(op_xra_m, xor_a);
    alu_a_r!(op_xra_a, xor_a, a);
    alu_a_imm!(op_xri, xor_a);

    // ORA r / (HL) / d8
    alu_a_r!(op_ora_b, or_a, b);
    alu_a_r!(op_ora_c, or_a, c);
    alu_a_r!(op_ora_d, or_a, d);
    alu_a_r!(op_ora_e, or_a, e);
    alu_a_r!(op_ora_h, or_a, h);
    alu_a_r!(op_ora_l, or_a, l);
    alu_a_m!(op_ora_m, or_a);
    alu_a_r!(op_ora_a, or_a, a);
    alu_a_imm!(op_ori, or_a);

    // CMP r / (HL) / d8
    alu_a_r!(op_cmp_b, cp_a, b);
    alu_a_r!(op_cmp_c, cp_a, c);
    alu_a_r!(op_cmp_d, cp_a, d);
    alu_a_r!(op_cmp_e, cp_a, e);
    alu_a_r!(op_cmp_h, cp_a, h);
    alu_a_r!(op_cmp_l, cp_a, l);
    alu_a_m!(op_cmp_m, cp_a);
    alu_a_r!(op_cmp_a, cp_a, a);
    alu_a_imm!(op_cpi, cp_a);

    // INR r / (HL)
    inr_r!(op_inr_b, b);
    inr_r!(op_inr_c, c);
    inr_r!(op_inr_d, d);
    inr_r!(op_inr_e, e);
    inr_r!(op_inr_h, h);
    inr_r!(op_inr_l, l);
    inr_r!(op_inr_a, a);
    pub fn op_inr_m(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        let addr = self.get_hl();
        let value = bus.read_byte(addr);
        let result = self.inr(value);
        bus.write_byte(addr, result);
        Ok(0)
    }

    // DCR r / (HL)
    dcr_r!(op_dcr_b, b);
    dcr_r!(op_dcr_c, c);
    dcr_r!(op_dcr_d, d);
    dcr_r!(op_dcr_e, e);
    dcr_r!(op_dcr_h, h);
    dcr_r!(op_dcr_l, l);
    dcr_r!(op_dcr_a, a);
    pub fn op_dcr_m(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        let addr = self.get_hl();
        let value = bus.read_byte(addr);
        let result = self.dcr(value);
        bus.write_byte(addr, result);
        Ok(0)
    }

    // DAD rp
    dad_rp!(op_dad_b, get_bc);
    dad_rp!(op_dad_d, get_de);
    dad_rp!(op_dad_h, get_hl);
    #[inline(always)]
    pub fn op_dad_sp(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.dad(self.sp);
        Ok(0)
    }

    // INX rp / DCX rp
    inx_rp!(op_inx_b, get_bc, set_bc);
    inx_rp!(op_inx_d, get_de, set_de);
    inx_rp!(op_inx_h, get_hl, set_hl);
    #[inline(always)]
    pub fn op_inx_sp(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.sp = self.sp.wrapping_add(1);
        Ok(0)
    }
    dcx_rp!(op_dcx_b, get_bc, set_bc);
    dcx_rp!(op_dcx_d, get_de, set_de);
    dcx_rp!(op_dcx_h, get_hl, set_hl);
    #[inline(always)]
    pub fn op_dcx_sp(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.sp = self.sp.wrapping_sub(1);
        Ok(0)
    }

    /// CMA: complement A; no flags affected.
    #[inline(always)]
    pub fn op_cma(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.a = !self.a;
        Ok(0)
    }
}
