// src/cpu/ops_control.rs
//
// Control transfer and miscellaneous opcodes: unconditional and
// conditional JMP/CALL/RET, PCHL, the eight RST vectors, and the flag/
// interrupt/halt toggles (EI/DI/HLT/STC/CMC/DAA).

use super::{Cpu, CpuResult, HaltReason, constants::*};
use crate::bus::Bus;
use log;

impl Cpu {
    pub fn op_nop(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        Ok(0)
    }

    // --- JMP / conditional Jcc / PCHL ---
    // Unlike CALL/RET, a conditional jump on the 8080 costs the same
    // 10 cycles whether or not the condition holds.
    fn conditional_jmp(&mut self, condition: bool, bus: &mut Bus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        if condition {
            self.pc = addr;
        }
        Ok(0)
    }
    pub fn op_jmp(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.pc = self.read_d16(bus);
        Ok(0)
    }
    pub fn op_jnz(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jz(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jnc(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(!self.get_flag(FLAG_Y), bus)
    }
    pub fn op_jc(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(self.get_flag(FLAG_Y), bus)
    }
    pub fn op_jpo(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(!self.get_flag(FLAG_P), bus)
    }
    pub fn op_jpe(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(self.get_flag(FLAG_P), bus)
    }
    pub fn op_jp(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(!self.get_flag(FLAG_S), bus)
    }
    pub fn op_jm(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_jmp(self.get_flag(FLAG_S), bus)
    }
    pub fn op_pchl(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.pc = self.get_hl();
        Ok(0)
    }

    // --- CALL / conditional Ccc ---
    // Taken costs 17, not-taken costs 11; the handler's base cost in
    // the opcode table is the not-taken figure, so the taken path
    // returns the +6-cycle difference.
    fn conditional_call(&mut self, condition: bool, bus: &mut Bus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        if condition {
            self.push_word(self.pc, bus);
            self.pc = addr;
            Ok(6)
        } else {
            Ok(0)
        }
    }
    pub fn op_call(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        self.push_word(self.pc, bus);
        self.pc = addr;
        Ok(0)
    }
    pub fn op_cnz(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_cz(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_cnc(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(!self.get_flag(FLAG_Y), bus)
    }
    pub fn op_cc(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(self.get_flag(FLAG_Y), bus)
    }
    pub fn op_cpo(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(!self.get_flag(FLAG_P), bus)
    }
    pub fn op_cpe(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(self.get_flag(FLAG_P), bus)
    }
    pub fn op_cp(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(!self.get_flag(FLAG_S), bus)
    }
    pub fn op_cm(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_call(self.get_flag(FLAG_S), bus)
    }

    // --- RET / conditional Rcc ---
    // Taken costs 11, not-taken costs 5; same +6 pattern as CALL.
    fn conditional_ret(&mut self, condition: bool, bus: &mut Bus) -> CpuResult<u16> {
        if condition {
            self.pc = self.pop_word(bus);
            Ok(6)
        } else {
            Ok(0)
        }
    }
    pub fn op_ret(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.pc = self.pop_word(bus);
        Ok(0)
    }
    pub fn op_rnz(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_rz(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_rnc(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_Y), bus)
    }
    pub fn op_rc(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_Y), bus)
    }
    pub fn op_rpo(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_P), bus)
    }
    pub fn op_rpe(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_P), bus)
    }
    pub fn op_rp(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_S), bus)
    }
    pub fn op_rm(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_S), bus)
    }

    // --- RST n: CALL to n*8; also the vehicle the interrupt scheduler
    // injects to vector into the video ISR ---
    fn rst(&mut self, vector: u16, bus: &mut Bus) -> CpuResult<u16> {
        self.push_word(self.pc, bus);
        self.pc = vector;
        Ok(0)
    }
    pub fn op_rst_0(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0000, bus)
    }
    pub fn op_rst_1(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0008, bus)
    }
    pub fn op_rst_2(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0010, bus)
    }
    pub fn op_rst_3(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0018, bus)
    }
    pub fn op_rst_4(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0020, bus)
    }
    pub fn op_rst_5(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0028, bus)
    }
    pub fn op_rst_6(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0030, bus)
    }
    pub fn op_rst_7(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        self.rst(0x0038, bus)
    }

    // --- Interrupt enable / halt ---
    // EI takes effect immediately in this model; the real hardware's
    // one-instruction delay is not observed by the ROM.
    pub fn op_ei(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.interrupts_enabled = true;
        Ok(0)
    }
    pub fn op_di(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.interrupts_enabled = false;
        Ok(0)
    }
    pub fn op_hlt(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.halt();
        Ok(0)
    }

    // --- Carry flag opcodes ---
    pub fn op_stc(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.set_flag(FLAG_Y, true);
        Ok(0)
    }
    pub fn op_cmc(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        let carry = self.get_flag(FLAG_Y);
        self.set_flag(FLAG_Y, !carry);
        Ok(0)
    }

    /// DAA: accepted but a no-op — the gameplay path never reaches it.
    pub fn op_daa(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        log::warn!(
            "DAA executed at {:#06X} (icount {}); decimal-adjust is a no-op in this core",
            self.instruction_pc,
            self.icount
        );
        Ok(0)
    }

    /// Unknown opcode: fatal. The diagnostic log line is emitted one
    /// level up in `dispatch`, which has the opcode byte; this handler
    /// only needs to signal the halt reason.
    pub fn handle_invalid_opcode(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        Err(HaltReason::UnknownOpcode)
    }
}
