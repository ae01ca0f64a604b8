// --- MOV macros ---
macro_rules! mov_r_r {
    ($name:ident, $dst:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.$dst = self.$src;
            Ok(0)
        }
    };
}
macro_rules! mov_r_m {
    ($name:ident, $dst:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.$dst = bus.read_byte(self.get_hl());
            Ok(0)
        }
    };
}
macro_rules! mov_m_r {
    ($name:ident, $src:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            bus.write_byte(self.get_hl(), self.$src);
            Ok(0)
        }
    };
}

// --- ALU macros ---
macro_rules! alu_a_r {
    ($name:ident, $op:ident, $r:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.$op(self.$r, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, $r:ident, carry) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.$op(self.$r, true);
            Ok(0)
        }
    };
}
macro_rules! alu_a_m {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.get_hl());
            self.$op(value, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = bus.read_byte(self.get_hl());
            self.$op(value, true);
            Ok(0)
        }
    };
}
macro_rules! alu_a_imm {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.read_d8(bus);
            self.$op(value, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.read_d8(bus);
            self.$op(value, true);
            Ok(0)
        }
    };
}

// --- MVI macros (immediate into register / (HL)) ---
macro_rules! mvi_r {
    ($name:ident, $dst:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.$dst = self.read_d8(bus);
            Ok(0)
        }
    };
}
macro_rules! mvi_m {
    ($name:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.read_d8(bus);
            bus.write_byte(self.get_hl(), value);
            Ok(0)
        }
    };
}

// --- INR/DCR macros ---
macro_rules! inr_r {
    ($name:ident, $r:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.$r = self.inr(self.$r);
            Ok(0)
        }
    };
}
macro_rules! dcr_r {
    ($name:ident, $r:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.$r = self.dcr(self.$r);
            Ok(0)
        }
    };
}

// --- 16-bit register-pair macros (INX/DCX/DAD/LXI/PUSH/POP) ---
macro_rules! inx_rp {
    ($name:ident, $get:ident, $set:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.$get().wrapping_add(1);
            self.$set(value);
            Ok(0)
        }
    };
}
macro_rules! dcx_rp {
    ($name:ident, $get:ident, $set:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.$get().wrapping_sub(1);
            self.$set(value);
            Ok(0)
        }
    };
}
macro_rules! dad_rp {
    ($name:ident, $get:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.dad(self.$get());
            Ok(0)
        }
    };
}
macro_rules! lxi_rp {
    ($name:ident, $set:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.read_d16(bus);
            self.$set(value);
            Ok(0)
        }
    };
}
macro_rules! push_rp {
    ($name:ident, $get:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            self.push_word(self.$get(), bus);
            Ok(0)
        }
    };
}
macro_rules! pop_rp {
    ($name:ident, $set:ident) => {
        pub fn $name(&mut self, bus: &mut crate::bus::Bus) -> super::CpuResult<u16> {
            let value = self.pop_word(bus);
            self.$set(value);
            Ok(0)
        }
    };
}
