// src/cpu/ops_rot_shift.rs
//
// Accumulator rotates. The flag math lives on `Cpu` itself
// (`rlca`/`rrca`/`ral`/`rar` in cpu.rs); these are thin opcode-table
// entry points.

use super::{Cpu, CpuResult};
use crate::bus::Bus;

impl Cpu {
    pub fn op_rlc(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.rlca();
        Ok(0)
    }
    pub fn op_rrc(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.rrca();
        Ok(0)
    }
    pub fn op_ral(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.ral();
        Ok(0)
    }
    pub fn op_rar(&mut self, _bus: &mut Bus) -> CpuResult<u16> {
        self.rar();
        Ok(0)
    }
}
