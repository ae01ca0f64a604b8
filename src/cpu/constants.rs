// Flag bit positions within the packed PSW byte.
pub const FLAG_S_POS: u8 = 7; // Sign
pub const FLAG_Z_POS: u8 = 6; // Zero
pub const FLAG_A_POS: u8 = 4; // Auxiliary carry: not modelled, preserved only
pub const FLAG_P_POS: u8 = 2; // Parity
pub const FLAG_Y_POS: u8 = 0; // Carry

// Flag masks.
pub const FLAG_S: u8 = 1 << FLAG_S_POS;
pub const FLAG_Z: u8 = 1 << FLAG_Z_POS;
pub const FLAG_A: u8 = 1 << FLAG_A_POS;
pub const FLAG_P: u8 = 1 << FLAG_P_POS;
pub const FLAG_Y: u8 = 1 << FLAG_Y_POS;

// Bit 1 of the packed PSW byte is wired high on real 8080 silicon; bits
// 3 and 5 are don't-care and simply preserved across a round-trip.
pub const PSW_CONSTANT_BIT: u8 = 1 << 1;

// RST n vectors to n*8; the video raster's two interrupts use RST 1
// (0xCF -> 0x08) at mid-screen and RST 2 (0xD7 -> 0x10) at end-of-frame.
pub const RST_1_OPCODE: u8 = 0xCF;
pub const RST_2_OPCODE: u8 = 0xD7;
pub const RST_TOGGLE_MASK: u8 = RST_1_OPCODE ^ RST_2_OPCODE; // 0x18

// Interrupt scheduler cadence: two RSTs per 60 Hz frame.
pub const CLOCK_HZ: u64 = 2_000_000;
pub const CYCLES_PER_HALF_FRAME: u64 = CLOCK_HZ / 120;
