// src/cpu/ops_io.rs
//
// IN/OUT opcode handlers, delegating to the arcade port dispatch on
// `Bus`.

use super::{Cpu, CpuResult, HaltReason};
use crate::bus::Bus;

impl Cpu {
    pub fn op_in(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        let port = self.read_d8(bus);
        self.a = bus.in_port(port).map_err(HaltReason::UnknownInputPort)?;
        Ok(0)
    }

    pub fn op_out(&mut self, bus: &mut Bus) -> CpuResult<u16> {
        let port = self.read_d8(bus);
        bus.out_port(port, self.a)
            .map_err(HaltReason::UnknownOutputPort)?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::{PORT_SHIFT_DATA, PORT_SHIFT_OFFSET, PORT_SHIFT_READ};
    use crate::tracer::NullTracer;

    #[test]
    fn in_out_round_trip_through_the_shifter() {
        // OUT 4, 0xAB ; OUT 4, 0xCD ; OUT 2, 3 ; IN 3
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        let mut tracer = NullTracer;
        bus.write_byte(0, 0xD3);
        bus.write_byte(1, PORT_SHIFT_DATA);
        bus.write_byte(2, 0xD3);
        bus.write_byte(3, PORT_SHIFT_DATA);
        bus.write_byte(4, 0xD3);
        bus.write_byte(5, PORT_SHIFT_OFFSET);
        bus.write_byte(6, 0xDB);
        bus.write_byte(7, PORT_SHIFT_READ);

        cpu.a = 0xAB;
        cpu.step(&mut bus, &mut tracer).unwrap();
        cpu.a = 0xCD;
        cpu.step(&mut bus, &mut tracer).unwrap();
        cpu.a = 3;
        cpu.step(&mut bus, &mut tracer).unwrap();
        cpu.step(&mut bus, &mut tracer).unwrap();
        assert_eq!(cpu.a, 0x6D);
    }

    #[test]
    fn unknown_port_halts_with_the_port_number() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        let mut tracer = NullTracer;
        bus.write_byte(0, 0xDB); // IN
        bus.write_byte(1, 7); // undocumented port
        let err = cpu.step(&mut bus, &mut tracer).unwrap_err();
        assert_eq!(err.reason, HaltReason::UnknownInputPort(7));
    }
}
